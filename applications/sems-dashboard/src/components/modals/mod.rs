pub mod device_info_modal;
pub mod settings_modal;

use leptos::*;

use crate::state::{use_dashboard, Modal};

pub use device_info_modal::DeviceInfoModal;
pub use settings_modal::SettingsModal;

/// Renders whichever dialog is open, if any
#[component]
pub fn ModalHost() -> impl IntoView {
    let dashboard = use_dashboard();

    move || {
        dashboard.modal.get().map(|modal| match modal {
            Modal::Settings(id) => view! { <SettingsModal id=id /> }.into_view(),
            Modal::DeviceInfo(id) => view! { <DeviceInfoModal id=id /> }.into_view(),
        })
    }
}
