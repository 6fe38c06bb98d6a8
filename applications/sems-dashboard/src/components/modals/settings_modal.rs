use leptos::*;

use crate::components::devices::card_model::DEFAULT_BRIGHTNESS;
use crate::models::{ColorTemp, DeviceId, DeviceKind, DeviceState};
use crate::state::use_dashboard;

pub const LOCATIONS: [&str; 4] = ["Living Room", "Kitchen", "Bedroom", "Other"];
const DEFAULT_AUTO_OFF_MINUTES: u32 = 60;

/// Editable copy of a device's settings, seeded from the latest snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDraft {
    pub display_name: String,
    pub auto_off_enabled: bool,
    pub auto_off_minutes: u32,
    pub default_brightness: u32,
    pub cooking_mode: bool,
    pub default_color_temp: ColorTemp,
    pub dinner_mode: bool,
    pub location: &'static str,
}

impl SettingsDraft {
    pub fn seed(id: &DeviceId, kind: DeviceKind, state: Option<&DeviceState>) -> Self {
        Self {
            display_name: kind.title(id),
            auto_off_enabled: false,
            auto_off_minutes: DEFAULT_AUTO_OFF_MINUTES,
            default_brightness: state
                .and_then(|s| s.brightness)
                .unwrap_or(DEFAULT_BRIGHTNESS)
                .clamp(1, 100),
            cooking_mode: false,
            default_color_temp: state
                .and_then(|s| s.color_temp.as_deref())
                .and_then(ColorTemp::parse)
                .unwrap_or_default(),
            dinner_mode: false,
            location: LOCATIONS[0],
        }
    }

    /// Auto-off minutes only editable while auto-off is enabled
    pub fn auto_off_minutes_disabled(&self) -> bool {
        !self.auto_off_enabled
    }

    pub fn set_auto_off_minutes(&mut self, raw: &str) {
        if let Ok(minutes) = raw.trim().parse::<u32>() {
            self.auto_off_minutes = minutes.clamp(1, 1440);
        }
    }
}

#[component]
pub fn SettingsModal(id: DeviceId) -> impl IntoView {
    let dashboard = use_dashboard();
    let kind = DeviceKind::resolve(id.as_str());

    let seed = dashboard.latest.with_untracked(|latest| {
        let state = latest.as_ref().and_then(|s| s.devices.get(id.as_str()));
        SettingsDraft::seed(&id, kind, state)
    });
    let heading = format!("{} Settings", seed.display_name);
    let draft = create_rw_signal(seed);

    let save_id = id.clone();
    let save = move |_| {
        draft.with_untracked(|d| log::info!("Saved settings for {}: {:?}", save_id, d));
        dashboard.close_modal();
    };

    view! {
        <div id="device-settings-modal" class="settings-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{heading}</h2>
                    <button class="close-modal" aria-label="Close" on:click=move |_| dashboard.close_modal()>
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    <div class="setting-group">
                        <h3>"Basic Settings"</h3>
                        <div class="setting-item">
                            <label for="device-name">"Device Name:"</label>
                            <input
                                type="text"
                                id="device-name"
                                prop:value=move || draft.with(|d| d.display_name.clone())
                                on:change=move |ev| draft.update(|d| d.display_name = event_target_value(&ev))
                            />
                        </div>
                        <div class="setting-item">
                            <label for="auto-off-enabled">
                                <input
                                    type="checkbox"
                                    id="auto-off-enabled"
                                    prop:checked=move || draft.with(|d| d.auto_off_enabled)
                                    on:change=move |ev| draft.update(|d| d.auto_off_enabled = event_target_checked(&ev))
                                />
                                " Enable Auto-Off"
                            </label>
                        </div>
                        <div class="setting-item">
                            <label for="auto-off-time">"Auto-Off After (minutes):"</label>
                            <input
                                type="number"
                                id="auto-off-time"
                                min="1"
                                max="1440"
                                prop:value=move || draft.with(|d| d.auto_off_minutes.to_string())
                                disabled=move || draft.with(SettingsDraft::auto_off_minutes_disabled)
                                on:change=move |ev| draft.update(|d| d.set_auto_off_minutes(&event_target_value(&ev)))
                            />
                        </div>
                    </div>
                    {match kind {
                        DeviceKind::KitchenLight => view! { <KitchenSettings draft=draft /> }.into_view(),
                        DeviceKind::DiningLight => view! { <DiningSettings draft=draft /> }.into_view(),
                        DeviceKind::Appliance => view! { <ApplianceSettings draft=draft /> }.into_view(),
                        _ => ().into_view(),
                    }}
                </div>
                <div class="modal-footer">
                    <button class="save-btn" on:click=save>"Save"</button>
                    <button on:click=move |_| dashboard.close_modal()>"Cancel"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn KitchenSettings(draft: RwSignal<SettingsDraft>) -> impl IntoView {
    view! {
        <div class="setting-group">
            <h3>"Kitchen Light Settings"</h3>
            <div class="setting-item">
                <label for="default-brightness">"Default Brightness:"</label>
                <input
                    type="range"
                    id="default-brightness"
                    min="1"
                    max="100"
                    prop:value=move || draft.with(|d| d.default_brightness.to_string())
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                            draft.update(|d| d.default_brightness = value.clamp(1, 100));
                        }
                    }
                />
                <span id="default-brightness-value">
                    {move || draft.with(|d| format!("{}%", d.default_brightness))}
                </span>
            </div>
            <div class="setting-item">
                <label for="kitchen-mode">
                    <input
                        type="checkbox"
                        id="kitchen-mode"
                        prop:checked=move || draft.with(|d| d.cooking_mode)
                        on:change=move |ev| draft.update(|d| d.cooking_mode = event_target_checked(&ev))
                    />
                    " Cooking Mode (Extra Brightness)"
                </label>
            </div>
        </div>
    }
}

#[component]
fn DiningSettings(draft: RwSignal<SettingsDraft>) -> impl IntoView {
    view! {
        <div class="setting-group">
            <h3>"Dining Light Settings"</h3>
            <div class="setting-item">
                <label for="default-color-temp">"Default Color Temperature:"</label>
                <select
                    id="default-color-temp"
                    on:change=move |ev| {
                        if let Some(temp) = ColorTemp::parse(&event_target_value(&ev)) {
                            draft.update(|d| d.default_color_temp = temp);
                        }
                    }
                >
                    {ColorTemp::ALL
                        .into_iter()
                        .map(|temp| {
                            view! {
                                <option
                                    value=temp.as_str()
                                    prop:selected=move || draft.with(|d| d.default_color_temp == temp)
                                >
                                    {temp.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="setting-item">
                <label for="dinner-mode">
                    <input
                        type="checkbox"
                        id="dinner-mode"
                        prop:checked=move || draft.with(|d| d.dinner_mode)
                        on:change=move |ev| draft.update(|d| d.dinner_mode = event_target_checked(&ev))
                    />
                    " Dinner Mode (Dimmed Warm Light)"
                </label>
            </div>
        </div>
    }
}

#[component]
fn ApplianceSettings(draft: RwSignal<SettingsDraft>) -> impl IntoView {
    view! {
        <div class="setting-group">
            <h3>"Placement"</h3>
            <div class="setting-item">
                <label for="device-location">"Location:"</label>
                <select
                    id="device-location"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(location) = LOCATIONS.into_iter().find(|l| *l == value) {
                            draft.update(|d| d.location = location);
                        }
                    }
                >
                    {LOCATIONS
                        .into_iter()
                        .map(|location| {
                            view! {
                                <option
                                    value=location
                                    prop:selected=move || draft.with(|d| d.location == location)
                                >
                                    {location}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
