use leptos::*;

use super::card_model::{CardModel, KindControls, DEFAULT_BRIGHTNESS};
use crate::models::{sleep_timer_label, ColorTemp, DeviceKind, Sensitivity, SLEEP_TIMER_OPTIONS};
use crate::state::RenderedCard;

/// Kind-specific controls; the markup is fixed by kind, values follow the model
#[component]
pub fn LightControls(card: RenderedCard, model: Memo<CardModel>) -> impl IntoView {
    match card.kind {
        DeviceKind::KitchenLight => view! { <BrightnessControl card=card model=model /> }.into_view(),
        DeviceKind::DiningLight => view! { <ColorTempControl card=card model=model /> }.into_view(),
        DeviceKind::BedLight => view! { <SleepControls card=card model=model /> }.into_view(),
        DeviceKind::SecurityLight => view! { <SecurityControls card=card model=model /> }.into_view(),
        DeviceKind::GenericLight | DeviceKind::Appliance => ().into_view(),
    }
}

#[component]
fn BrightnessControl(card: RenderedCard, model: Memo<CardModel>) -> impl IntoView {
    let values = create_memo(move |_| {
        model.with(|m| match m.controls {
            KindControls::Brightness { value, disabled } => (value, disabled),
            _ => (DEFAULT_BRIGHTNESS, true),
        })
    });
    let input_id = format!("{}-brightness", card.id);
    let state = card.state;
    let device = card.id.clone();

    let on_input = move |ev| {
        if let Ok(value) = event_target_value(&ev).parse::<u32>() {
            state.update(|s| s.brightness = Some(value));
            log::info!("{} brightness set to {}%", device, value);
        }
    };

    view! {
        <div class="light-control brightness-control">
            <label for=input_id.clone()>"Brightness: "</label>
            <input
                type="range"
                id=input_id
                min="1"
                max="100"
                prop:value=move || values.get().0.to_string()
                disabled=move || values.get().1
                on:input=on_input
            />
            <span class="brightness-value">{move || format!("{}%", values.get().0)}</span>
        </div>
    }
}

#[component]
fn ColorTempControl(card: RenderedCard, model: Memo<CardModel>) -> impl IntoView {
    let values = create_memo(move |_| {
        model.with(|m| match m.controls {
            KindControls::ColorTemperature { value, disabled } => (value, disabled),
            _ => (ColorTemp::default(), true),
        })
    });
    let select_id = format!("{}-color-temp", card.id);
    let state = card.state;
    let device = card.id.clone();

    let on_change = move |ev| {
        if let Some(temp) = ColorTemp::parse(&event_target_value(&ev)) {
            state.update(|s| s.color_temp = Some(temp.as_str().to_string()));
            log::info!("{} colour temperature set to {}", device, temp.as_str());
        }
    };

    view! {
        <div class="light-control color-temp-control">
            <label for=select_id.clone()>"Color Temperature: "</label>
            <select id=select_id disabled=move || values.get().1 on:change=on_change>
                {ColorTemp::ALL
                    .into_iter()
                    .map(|temp| {
                        view! {
                            <option value=temp.as_str() prop:selected=move || values.get().0 == temp>
                                {temp.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn SleepControls(card: RenderedCard, model: Memo<CardModel>) -> impl IntoView {
    let values = create_memo(move |_| {
        model.with(|m| match m.controls {
            KindControls::SleepMode {
                sleep_mode,
                timer,
                mode_disabled,
                timer_disabled,
            } => (sleep_mode, timer, mode_disabled, timer_disabled),
            _ => (false, 0, true, true),
        })
    });
    let mode_id = format!("{}-sleep-mode", card.id);
    let timer_id = format!("{}-sleep-timer", card.id);
    let state = card.state;
    let mode_device = card.id.clone();
    let timer_device = card.id.clone();

    let on_mode = move |ev| {
        let enabled = event_target_checked(&ev);
        state.update(|s| s.sleep_mode = Some(enabled));
        log::info!("{} sleep mode {}", mode_device, if enabled { "on" } else { "off" });
    };

    let on_timer = move |ev| {
        if let Ok(minutes) = event_target_value(&ev).parse::<u32>() {
            state.update(|s| s.sleep_timer = Some(minutes));
            log::info!("{} auto-off set to {}", timer_device, sleep_timer_label(minutes));
        }
    };

    // A value outside the fixed list gets one extra option; the fixed options
    // are created once and only their selection is patched
    let extra = create_memo(move |_| {
        let current = values.get().1;
        (!SLEEP_TIMER_OPTIONS.contains(&current)).then_some(current)
    });
    let timer_option = move |minutes: u32| {
        view! {
            <option value=minutes.to_string() prop:selected=move || values.get().1 == minutes>
                {sleep_timer_label(minutes)}
            </option>
        }
    };

    view! {
        <div class="light-control sleep-control">
            <label for=mode_id.clone()>
                <input
                    type="checkbox"
                    id=mode_id
                    prop:checked=move || values.get().0
                    disabled=move || values.get().2
                    on:change=on_mode
                />
                " Sleep Mode"
            </label>
        </div>
        <div class="light-control sleep-timer-control">
            <label for=timer_id.clone()>"Auto-off Timer: "</label>
            <select id=timer_id disabled=move || values.get().3 on:change=on_timer>
                {SLEEP_TIMER_OPTIONS.into_iter().map(timer_option).collect_view()}
                {move || extra.get().map(timer_option)}
            </select>
        </div>
    }
}

#[component]
fn SecurityControls(card: RenderedCard, model: Memo<CardModel>) -> impl IntoView {
    let values = create_memo(move |_| {
        model.with(|m| match m.controls {
            KindControls::Security {
                motion_detection,
                sensitivity,
                auto_schedule,
                motion_disabled,
                sensitivity_disabled,
                schedule_disabled,
            } => (
                motion_detection,
                sensitivity,
                auto_schedule,
                motion_disabled,
                sensitivity_disabled,
                schedule_disabled,
            ),
            _ => (true, Sensitivity::default(), true, true, true, true),
        })
    });
    let motion_id = format!("{}-motion-detection", card.id);
    let sensitivity_id = format!("{}-sensitivity", card.id);
    let schedule_id = format!("{}-auto-schedule", card.id);
    let state = card.state;
    let motion_device = card.id.clone();
    let sensitivity_device = card.id.clone();
    let schedule_device = card.id.clone();

    let on_motion = move |ev| {
        let enabled = event_target_checked(&ev);
        state.update(|s| s.motion_detection = Some(enabled));
        log::info!("{} motion detection {}", motion_device, if enabled { "on" } else { "off" });
    };

    let on_sensitivity = move |ev| {
        if let Some(level) = Sensitivity::parse(&event_target_value(&ev)) {
            state.update(|s| s.sensitivity = Some(level.as_str().to_string()));
            log::info!("{} sensitivity set to {}", sensitivity_device, level.as_str());
        }
    };

    let on_schedule = move |ev| {
        let enabled = event_target_checked(&ev);
        state.update(|s| s.auto_schedule = Some(enabled));
        log::info!("{} auto schedule {}", schedule_device, if enabled { "on" } else { "off" });
    };

    view! {
        <div class="light-control motion-control">
            <label for=motion_id.clone()>
                <input
                    type="checkbox"
                    id=motion_id
                    prop:checked=move || values.get().0
                    disabled=move || values.get().3
                    on:change=on_motion
                />
                " Motion Detection"
            </label>
        </div>
        <div class="light-control sensitivity-control">
            <label for=sensitivity_id.clone()>"Sensitivity: "</label>
            <select id=sensitivity_id disabled=move || values.get().4 on:change=on_sensitivity>
                {Sensitivity::ALL
                    .into_iter()
                    .map(|level| {
                        view! {
                            <option value=level.as_str() prop:selected=move || values.get().1 == level>
                                {level.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
        <div class="light-control schedule-control">
            <label for=schedule_id.clone()>
                <input
                    type="checkbox"
                    id=schedule_id
                    prop:checked=move || values.get().2
                    disabled=move || values.get().5
                    on:change=on_schedule
                />
                " Auto Schedule"
            </label>
        </div>
    }
}
