//! Card registry kept in step with incoming snapshots
//!
//! Each device id owns exactly one [`RenderedCard`]. A card is created the
//! first time its id appears and then only ever patched: the view bound to
//! it is mounted once by the keyed list and follows its `state` signal, so
//! a snapshot never rebuilds a card that already exists.

use leptos::*;
use std::collections::BTreeMap;

use crate::models::{Container, DeviceId, DeviceKind, DeviceState};

/// Registry entry for one device
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub id: DeviceId,
    pub kind: DeviceKind,
    pub state: RwSignal<DeviceState>,
    /// Set while a toggle request is in flight
    pub pending: RwSignal<bool>,
}

impl RenderedCard {
    fn new(id: DeviceId, state: DeviceState) -> Self {
        Self {
            kind: DeviceKind::resolve(id.as_str()),
            id,
            state: create_rw_signal(state),
            pending: create_rw_signal(false),
        }
    }

    fn dispose(&self) {
        self.state.dispose();
        self.pending.dispose();
    }
}

/// What a reconcile pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub created: usize,
    pub patched: usize,
    pub unchanged: usize,
    pub removed: usize,
}

impl ReconcileOutcome {
    /// Whether the set of cards (not just their contents) changed
    pub fn membership_changed(&self) -> bool {
        self.created > 0 || self.removed > 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    cards: BTreeMap<DeviceId, RenderedCard>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the registry in line with `devices`.
    ///
    /// Existing cards get their state signal set only when the state
    /// actually differs, so repeating a snapshot writes nothing. A patch
    /// that flips ON/OFF clears the card's pending flag.
    pub fn reconcile(&mut self, devices: &BTreeMap<String, DeviceState>) -> ReconcileOutcome {
        let mut outcome = ReconcileOutcome::default();

        for (name, incoming) in devices {
            match self.cards.get(name.as_str()) {
                Some(card) => {
                    let flipped = card.state.with_untracked(|current| {
                        (current != incoming).then(|| current.is_on() != incoming.is_on())
                    });

                    match flipped {
                        Some(flipped) => {
                            card.state.set(incoming.clone());
                            if flipped {
                                card.pending.set(false);
                            }
                            outcome.patched += 1;
                        }
                        None => outcome.unchanged += 1,
                    }
                }
                None => {
                    let id = DeviceId::new(name.clone());
                    self.cards
                        .insert(id.clone(), RenderedCard::new(id, incoming.clone()));
                    outcome.created += 1;
                }
            }
        }

        let before = self.cards.len();
        self.cards.retain(|id, card| {
            let keep = devices.contains_key(id.as_str());
            if !keep {
                card.dispose();
            }
            keep
        });
        outcome.removed = before - self.cards.len();

        outcome
    }

    pub fn get(&self, id: &str) -> Option<&RenderedCard> {
        self.cards.get(id)
    }

    /// Cards for one container, in device-id order
    pub fn cards_in(&self, container: Container) -> Vec<RenderedCard> {
        self.cards
            .values()
            .filter(|card| card.kind.container() == container)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
