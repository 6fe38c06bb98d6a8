pub mod card_model;
pub mod device_row;
pub mod light_card;
pub mod light_controls;

use leptos::*;

use crate::models::Container;
use crate::state::RenderedCard;

pub use card_model::{CardModel, KindControls};
pub use device_row::DeviceRow;
pub use light_card::LightCard;

/// Mount the renderer for a card's kind
pub fn render_card(card: RenderedCard) -> View {
    match card.kind.container() {
        Container::LightsGrid => view! { <LightCard card=card /> }.into_view(),
        Container::DevicesTable => view! { <DeviceRow card=card /> }.into_view(),
    }
}
