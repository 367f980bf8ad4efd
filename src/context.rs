//! Card Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_viewport::ViewportSize;
use reactive_stores::Store;

use crate::config::CardConfig;
use crate::sequencer::{IntervalScheduler, Scheduler, Sequencer};
use crate::state::CardState;
use crate::store::{self, CardStore};

/// Card-wide handles provided via context
pub struct CardContext<S: Scheduler + 'static = IntervalScheduler> {
    /// Field-level reactive card state
    pub store: CardStore,
    /// Celebration timer, dropped with the owning component
    sequencer: StoredValue<Sequencer<S>, LocalStorage>,
}

impl<S: Scheduler + 'static> Clone for CardContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scheduler + 'static> Copy for CardContext<S> {}

impl CardContext {
    /// Card driven by the browser interval timer
    pub fn new(config: &CardConfig) -> Self {
        Self::with_scheduler(config, IntervalScheduler)
    }
}

impl<S: Scheduler + 'static> CardContext<S> {
    /// Create the card state and its sequencer under the current owner.
    /// A running sequencer is cancelled when that owner is cleaned up.
    pub fn with_scheduler(config: &CardConfig, scheduler: S) -> Self {
        let store = Store::new(CardState::from_config(config));
        let sequencer = StoredValue::new_local(Sequencer::new(scheduler, config.tick_interval()));

        on_cleanup(move || {
            sequencer.try_with_value(|seq| seq.cancel());
        });

        Self { store, sequencer }
    }

    pub fn light_candle(&self, index: usize) {
        if store::store_light_candle(&self.store, index) {
            tracing::debug!(index, "candle lit");
        } else {
            tracing::debug!(index, "candle click ignored");
        }
    }

    pub fn pop_balloon(&self, index: usize) {
        if store::store_pop_balloon(&self.store, index) {
            tracing::debug!(index, "balloon popped");
        } else {
            tracing::debug!(index, "balloon click ignored");
        }
    }

    /// Start the celebration: overlay now, candles lit one per tick.
    /// Returns false if the card was already celebrating.
    pub fn celebrate(&self) -> bool {
        if !store::store_celebrate(&self.store) {
            tracing::debug!("already celebrating");
            return false;
        }
        tracing::info!("celebration started");

        let store = self.store;
        self.sequencer
            .try_with_value(|seq| seq.start(move || store::store_sequencer_tick(&store)))
            .unwrap_or(false)
    }

    pub fn resize(&self, viewport: ViewportSize) {
        store::store_resize(&self.store, viewport);
    }
}

/// Get the card context from context
pub fn use_card_context() -> CardContext {
    expect_context::<CardContext>()
}
