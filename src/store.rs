//! Card State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_viewport::ViewportSize;
use reactive_stores::Store;

use crate::state::{CardState, CardStateStoreFields, Tick};

/// Type alias for the store
pub type CardStore = Store<CardState>;

/// Store fields a transition can change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardField {
    LitCount,
    PoppedCount,
    IsCelebrating,
    IsOverlayVisible,
    Viewport,
}

fn changed_fields(prev: &CardState, next: &CardState) -> Vec<CardField> {
    let mut fields = Vec::new();
    if next.lit_count != prev.lit_count {
        fields.push(CardField::LitCount);
    }
    if next.popped_count != prev.popped_count {
        fields.push(CardField::PoppedCount);
    }
    if next.is_celebrating != prev.is_celebrating {
        fields.push(CardField::IsCelebrating);
    }
    if next.is_overlay_visible != prev.is_overlay_visible {
        fields.push(CardField::IsOverlayVisible);
    }
    if next.viewport != prev.viewport {
        fields.push(CardField::Viewport);
    }
    fields
}

// ========================
// Store Helper Functions
// ========================

/// Run a transition on a snapshot, then write back only the fields that changed.
///
/// Returns None if the store has already been disposed.
fn store_apply<R>(store: &CardStore, transition: impl FnOnce(&mut CardState) -> R) -> Option<R> {
    let prev = store.try_get_untracked()?;
    let mut next = prev.clone();
    let result = transition(&mut next);

    for field in changed_fields(&prev, &next) {
        match field {
            CardField::LitCount => store.lit_count().set(next.lit_count),
            CardField::PoppedCount => store.popped_count().set(next.popped_count),
            CardField::IsCelebrating => store.is_celebrating().set(next.is_celebrating),
            CardField::IsOverlayVisible => store.is_overlay_visible().set(next.is_overlay_visible),
            CardField::Viewport => store.viewport().set(next.viewport),
        }
    }
    Some(result)
}

/// Light a candle in the store (ordered gating applies)
pub fn store_light_candle(store: &CardStore, index: usize) -> bool {
    store_apply(store, |state| state.light_candle(index)).unwrap_or(false)
}

/// Pop a balloon in the store (ordered gating applies)
pub fn store_pop_balloon(store: &CardStore, index: usize) -> bool {
    store_apply(store, |state| state.pop_balloon(index)).unwrap_or(false)
}

/// Mark the card as celebrating; false if it already was
pub fn store_celebrate(store: &CardStore) -> bool {
    store_apply(store, CardState::celebrate).unwrap_or(false)
}

/// One sequencer tick. A disposed store reports `Finished` so the timer stops.
pub fn store_sequencer_tick(store: &CardStore) -> Tick {
    store_apply(store, CardState::sequencer_tick).unwrap_or(Tick::Finished)
}

pub fn store_resize(store: &CardStore, viewport: ViewportSize) {
    store_apply(store, |state| state.resize(viewport));
}
