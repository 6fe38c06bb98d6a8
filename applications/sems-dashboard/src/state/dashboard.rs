use leptos::*;

use super::reconciler::{ReconcileOutcome, Reconciler, RenderedCard};
use crate::api::ApiClient;
use crate::config::DashboardConfig;
use crate::feed::{parse_snapshot, FeedError, PushMessage};
use crate::format::local_today;
use crate::models::{
    AggregatedConsumptionEntry, ControlRequest, DeviceId, DeviceSnapshot, EnergySeries, LogEntry,
};

/// Where the snapshot pipeline stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    Loading,
    Ready,
    /// Last snapshot was rejected; the message replaces the dashboard
    Failed(String),
}

/// Dialog currently open over the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Settings(DeviceId),
    DeviceInfo(DeviceId),
}

/// All shared dashboard state.
///
/// Created once by the root component and handed to the push channel; views
/// reach it through context. The registry is written only by
/// [`DashboardState::apply_snapshot`], the snapshot cache only by the feed.
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub config: StoredValue<DashboardConfig>,
    pub client: StoredValue<ApiClient>,
    pub status: RwSignal<FeedStatus>,
    /// Most recent accepted snapshot
    pub latest: RwSignal<Option<DeviceSnapshot>>,
    /// Card registry; notified only when cards come or go
    pub cards: RwSignal<Reconciler>,
    pub usage: RwSignal<Vec<AggregatedConsumptionEntry>>,
    pub logs: RwSignal<Vec<LogEntry>>,
    pub series: RwSignal<EnergySeries>,
    pub connected: RwSignal<bool>,
    pub modal: RwSignal<Option<Modal>>,
    pub refresh_trigger: RwSignal<u32>,
    owner: Option<Owner>,
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        let client = ApiClient::new(config.api_url.clone());

        Self {
            config: store_value(config),
            client: store_value(client),
            status: create_rw_signal(FeedStatus::Loading),
            latest: create_rw_signal(None),
            cards: create_rw_signal(Reconciler::new()),
            usage: create_rw_signal(Vec::new()),
            logs: create_rw_signal(Vec::new()),
            series: create_rw_signal(EnergySeries::default()),
            connected: create_rw_signal(false),
            modal: create_rw_signal(None),
            refresh_trigger: create_rw_signal(0),
            owner: Owner::current(),
        }
    }

    /// Reconcile the cards against `snapshot` and cache it
    pub fn apply_snapshot(&self, snapshot: DeviceSnapshot) -> ReconcileOutcome {
        let state = *self;

        // Card signals must outlive the timer or socket callback that
        // delivered the snapshot
        let outcome = state.with_owner(move || {
            batch(move || {
                let outcome = state
                    .cards
                    .try_update_untracked(|registry| registry.reconcile(&snapshot.devices))
                    .unwrap_or_default();

                if outcome.membership_changed() {
                    state.cards.update(|_| {});
                }

                state.latest.set(Some(snapshot));
                if state.status.with_untracked(|s| *s != FeedStatus::Ready) {
                    state.status.set(FeedStatus::Ready);
                }

                outcome
            })
        });

        log::debug!(
            "Reconciled snapshot: {} created, {} patched, {} unchanged, {} removed",
            outcome.created,
            outcome.patched,
            outcome.unchanged,
            outcome.removed
        );
        outcome
    }

    /// Apply a pulled or pushed snapshot; rejected ones replace the dashboard
    /// with their message and leave the cards alone
    pub fn apply_feed(&self, result: Result<DeviceSnapshot, FeedError>) {
        match result {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot);
            }
            Err(e) => {
                log::error!("Snapshot rejected: {}", e);
                self.status.set(FeedStatus::Failed(e.to_string()));
            }
        }
    }

    /// Route a push frame to the part of the state it updates
    pub fn apply_push(&self, message: PushMessage) {
        match message {
            PushMessage::DatabaseUpdate(payload) => self.apply_feed(parse_snapshot(payload)),
            PushMessage::AggregatedConsumptionUpdate(update) => {
                self.usage.set(update.devices);
            }
            PushMessage::LogUpdate(batch) => {
                self.logs.set(batch.entries(local_today()));
            }
            PushMessage::BatterySolarUpdate(batch) => {
                let added = self
                    .series
                    .try_update(|series| series.append(batch.data))
                    .unwrap_or_default();
                log::debug!("Added {} battery/solar points", added);
            }
        }
    }

    pub fn set_connected(&self, connected: bool) {
        if self.connected.try_get_untracked() != Some(connected) {
            self.connected.set(connected);
        }
    }

    /// Re-run the initial pull
    pub fn refresh(&self) {
        self.refresh_trigger.update(|n| *n += 1);
    }

    /// True once a snapshot has been accepted
    pub fn has_loaded(&self) -> bool {
        self.latest.with(Option::is_some)
    }

    /// True once the first pull has finished, successfully or not
    pub fn has_settled(&self) -> bool {
        self.status.with(|s| *s != FeedStatus::Loading)
    }

    pub fn card(&self, id: &DeviceId) -> Option<RenderedCard> {
        self.cards.with_untracked(|registry| registry.get(id.as_str()).cloned())
    }

    /// Send a toggle for `id` and show the card as pending.
    ///
    /// The pending flag clears when a snapshot flips the device or when the
    /// failsafe timer fires, whichever comes first.
    pub fn toggle(&self, id: &DeviceId) {
        let Some((card, request)) = self.begin_toggle(id) else {
            return;
        };

        let client = self.client.get_value();
        spawn_local(async move {
            match client.control_device(&request).await {
                Ok(response) => log::info!("Control response for {}: {}", request.device_name, response),
                Err(e) => log::error!("Control request for {} failed: {}", request.device_name, e),
            }
        });

        #[cfg(target_arch = "wasm32")]
        {
            use gloo_timers::callback::Timeout;

            let pending = card.pending;
            let failsafe_ms = self.config.with_value(|c| c.toggle_failsafe_ms);
            Timeout::new(failsafe_ms, move || {
                pending.try_set(false);
            })
            .forget();
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = card;
    }

    /// Mark the card pending and build the request that inverts its state.
    ///
    /// `None` for unknown devices and for cards still waiting on a toggle.
    pub fn begin_toggle(&self, id: &DeviceId) -> Option<(RenderedCard, ControlRequest)> {
        let Some(card) = self.card(id) else {
            log::warn!("Toggle for unknown device {}", id);
            return None;
        };
        if card.pending.get_untracked() {
            log::debug!("Toggle for {} ignored while pending", id);
            return None;
        }

        let request = card
            .state
            .with_untracked(|current| ControlRequest::toggle(id, current));
        card.pending.set(true);
        log::info!(
            "Requesting {} for {}",
            request.control_action.as_str(),
            request.device_name
        );

        Some((card, request))
    }

    pub fn open_modal(&self, modal: Modal) {
        self.modal.set(Some(modal));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    fn with_owner<T>(&self, f: impl FnOnce() -> T) -> T {
        match self.owner {
            Some(owner) => leptos::with_owner(owner, f),
            None => f(),
        }
    }
}

/// Create the dashboard state and provide it as context
pub fn provide_dashboard(config: DashboardConfig) -> DashboardState {
    let state = DashboardState::new(config);
    provide_context(state);
    state
}

/// Hook to access the dashboard state
pub fn use_dashboard() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AggregatedConsumption, BatterySolarBatch, BatterySolarPoint, DeviceState, LogBatch,
        LogRecord, PowerState,
    };
    use serde_json::json;
    use std::collections::BTreeMap;

    fn snapshot(devices: &[(&str, PowerState)]) -> DeviceSnapshot {
        DeviceSnapshot {
            timestamp: "2025-03-01 10:00:00".to_string(),
            battery_level: 500.0,
            solar_output: 120.0,
            devices: devices
                .iter()
                .map(|(name, state)| {
                    (
                        name.to_string(),
                        DeviceState {
                            state: *state,
                            consumption: Some(0.4),
                            ..Default::default()
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_snapshot_marks_ready_and_caches() {
        let runtime = create_runtime();
        let state = DashboardState::new(DashboardConfig::default());
        assert_eq!(state.status.get_untracked(), FeedStatus::Loading);

        let outcome = state.apply_snapshot(snapshot(&[("tv", PowerState::On)]));

        assert_eq!(outcome.created, 1);
        assert_eq!(state.status.get_untracked(), FeedStatus::Ready);
        assert!(state.latest.get_untracked().is_some());
        assert!(state.card(&DeviceId::new("tv")).is_some());

        runtime.dispose();
    }

    #[test]
    fn test_membership_notification_only_on_change() {
        let runtime = create_runtime();
        let state = DashboardState::new(DashboardConfig::default());
        let notified = create_rw_signal(0);
        create_effect(move |_| {
            state.cards.with(|_| ());
            notified.update_untracked(|n| *n += 1);
        });

        state.apply_snapshot(snapshot(&[("tv", PowerState::On)]));
        assert_eq!(notified.get_untracked(), 2);

        state.apply_snapshot(snapshot(&[("tv", PowerState::Off)]));
        assert_eq!(notified.get_untracked(), 2);

        state.apply_snapshot(snapshot(&[]));
        assert_eq!(notified.get_untracked(), 3);

        runtime.dispose();
    }

    #[test]
    fn test_rejected_snapshot_leaves_cards() {
        let runtime = create_runtime();
        let state = DashboardState::new(DashboardConfig::default());
        state.apply_snapshot(snapshot(&[("tv", PowerState::On)]));

        state.apply_push(PushMessage::DatabaseUpdate(json!({"error": "No data found"})));

        assert_eq!(
            state.status.get_untracked(),
            FeedStatus::Failed("No data found".to_string())
        );
        assert!(state.card(&DeviceId::new("tv")).is_some());

        // A later valid snapshot recovers
        state.apply_push(PushMessage::DatabaseUpdate(
            json!({"battery_level": 10, "devices": {"tv": {"state": "OFF"}}}),
        ));
        assert_eq!(state.status.get_untracked(), FeedStatus::Ready);

        runtime.dispose();
    }

    #[test]
    fn test_secondary_feeds() {
        let runtime = create_runtime();
        let state = DashboardState::new(DashboardConfig::default());

        state.apply_push(PushMessage::AggregatedConsumptionUpdate(AggregatedConsumption {
            devices: vec![AggregatedConsumptionEntry {
                device_name: "tv".to_string(),
                energy_consumed: 6.0,
            }],
        }));
        assert_eq!(state.usage.get_untracked().len(), 1);

        state.apply_push(PushMessage::LogUpdate(LogBatch {
            logs: vec![LogRecord {
                timestamp: "2025-03-01 10:00:00".to_string(),
                changes: "tv turned ON\nnoise".to_string(),
            }],
        }));
        assert_eq!(state.logs.get_untracked().len(), 1);

        state.apply_push(PushMessage::BatterySolarUpdate(BatterySolarBatch {
            data: vec![BatterySolarPoint {
                timestamp: "2025-03-01 10:00:00".to_string(),
                battery_level: 1.0,
                solar_output: 2.0,
            }],
        }));
        assert_eq!(state.series.with_untracked(|s| s.points().len()), 1);

        runtime.dispose();
    }

    #[test]
    fn test_begin_toggle_marks_pending_once() {
        let runtime = create_runtime();
        let state = DashboardState::new(DashboardConfig::default());
        state.apply_snapshot(snapshot(&[("tv", PowerState::On)]));
        let tv = DeviceId::new("tv");

        let (card, request) = state.begin_toggle(&tv).unwrap();
        assert!(card.pending.get_untracked());
        assert_eq!(request.device_name, tv);
        assert_eq!(request.control_action, PowerState::Off);

        // Second click while waiting is ignored
        assert!(state.begin_toggle(&tv).is_none());
        assert!(state.begin_toggle(&DeviceId::new("fridge")).is_none());

        runtime.dispose();
    }

    #[test]
    fn test_flip_clears_pending_and_allows_next_toggle() {
        let runtime = create_runtime();
        let state = DashboardState::new(DashboardConfig::default());
        state.apply_snapshot(snapshot(&[("tv", PowerState::Off)]));
        let tv = DeviceId::new("tv");

        let (card, request) = state.begin_toggle(&tv).unwrap();
        assert_eq!(request.control_action, PowerState::On);

        // Unchanged state keeps the card pending
        state.apply_snapshot(snapshot(&[("tv", PowerState::Off)]));
        assert!(card.pending.get_untracked());

        state.apply_snapshot(snapshot(&[("tv", PowerState::On)]));
        assert!(!card.pending.get_untracked());

        let (_, request) = state.begin_toggle(&tv).unwrap();
        assert_eq!(request.control_action, PowerState::Off);

        runtime.dispose();
    }

    #[test]
    fn test_failed_first_pull_settles_without_loading() {
        let runtime = create_runtime();
        let state = DashboardState::new(DashboardConfig::default());
        assert!(!state.has_settled());

        state.apply_feed(Err(FeedError::Backend("No data found".to_string())));

        assert!(state.has_settled());
        assert!(!state.has_loaded());

        runtime.dispose();
    }

    #[test]
    fn test_connected_flag() {
        let runtime = create_runtime();
        let state = DashboardState::new(DashboardConfig::default());

        state.set_connected(true);
        assert!(state.connected.get_untracked());
        state.set_connected(false);
        assert!(!state.connected.get_untracked());

        runtime.dispose();
    }
}
