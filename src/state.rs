//! Card State
//!
//! Transient UI state of one birthday card and the rules that advance it.
//! Counters only move forward, one step at a time, in index order.

use leptos_viewport::ViewportSize;
use reactive_stores::Store;

use crate::config::CardConfig;

/// Result of one celebration sequencer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A candle was lit; keep ticking
    Advanced,
    /// Every candle is lit; the timer should stop
    Finished,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CardState {
    pub total_candles: usize,
    pub total_balloons: usize,
    /// Candles lit so far, `0..=total_candles`
    pub lit_count: usize,
    /// Balloons popped so far, `0..=total_balloons`
    pub popped_count: usize,
    /// Set once by `celebrate`, never cleared
    pub is_celebrating: bool,
    /// Set on completion or celebration start, never cleared
    pub is_overlay_visible: bool,
    pub viewport: ViewportSize,
}

impl CardState {
    pub fn new(total_candles: usize, total_balloons: usize) -> Self {
        Self {
            total_candles,
            total_balloons,
            ..Default::default()
        }
    }

    pub fn from_config(config: &CardConfig) -> Self {
        Self::new(config.total_candles, config.total_balloons)
    }

    /// Light candle `index`. Only the next unlit candle counts.
    pub fn light_candle(&mut self, index: usize) -> bool {
        if index != self.lit_count || self.lit_count >= self.total_candles {
            return false;
        }
        self.lit_count += 1;
        self.check_completion();
        true
    }

    /// Pop balloon `index`. Only the next unpopped balloon counts.
    pub fn pop_balloon(&mut self, index: usize) -> bool {
        if index != self.popped_count || self.popped_count >= self.total_balloons {
            return false;
        }
        self.popped_count += 1;
        self.check_completion();
        true
    }

    /// Start the celebration. Returns false if it already started,
    /// in which case no sequencer should be started either.
    pub fn celebrate(&mut self) -> bool {
        if self.is_celebrating {
            return false;
        }
        self.is_celebrating = true;
        self.is_overlay_visible = true;
        true
    }

    /// One sequencer step: light the next candle if any remain.
    /// Reports `Finished` once the last candle is lit.
    pub fn sequencer_tick(&mut self) -> Tick {
        if self.lit_count < self.total_candles {
            self.lit_count += 1;
            self.check_completion();
        }
        if self.lit_count >= self.total_candles {
            Tick::Finished
        } else {
            Tick::Advanced
        }
    }

    pub fn resize(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    pub fn candles_complete(&self) -> bool {
        self.lit_count == self.total_candles
    }

    pub fn balloons_complete(&self) -> bool {
        self.popped_count == self.total_balloons
    }

    pub fn is_complete(&self) -> bool {
        self.candles_complete() && self.balloons_complete()
    }

    // Completion watcher: re-evaluated after every counter change.
    fn check_completion(&mut self) {
        if self.is_complete() {
            self.is_overlay_visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardState {
        CardState::new(7, 5)
    }

    fn assert_bounds(state: &CardState) {
        assert!(state.lit_count <= state.total_candles);
        assert!(state.popped_count <= state.total_balloons);
    }

    #[test]
    fn test_light_in_order() {
        let mut state = card();
        for i in 0..7 {
            assert!(state.light_candle(i));
            assert_eq!(state.lit_count, i + 1);
        }
        assert!(state.candles_complete());
        assert!(!state.is_overlay_visible);
    }

    #[test]
    fn test_out_of_order_candle_ignored() {
        let mut state = card();
        assert!(!state.light_candle(3));
        assert_eq!(state.lit_count, 0);
    }

    #[test]
    fn test_only_current_index_advances() {
        let mut state = card();
        state.light_candle(0);
        state.light_candle(1);
        state.light_candle(2);

        for index in 0..20 {
            let mut attempt = state.clone();
            let advanced = attempt.light_candle(index);
            if index == 3 {
                assert!(advanced);
                assert_eq!(attempt.lit_count, 4);
            } else {
                assert!(!advanced);
                assert_eq!(attempt.lit_count, 3);
            }
        }
    }

    #[test]
    fn test_relighting_is_noop() {
        let mut state = card();
        for i in 0..4 {
            state.light_candle(i);
        }
        for i in 0..4 {
            assert!(!state.light_candle(i));
        }
        assert_eq!(state.lit_count, 4);
    }

    #[test]
    fn test_balloons_gated_like_candles() {
        let mut state = card();
        assert!(!state.pop_balloon(1));
        assert!(state.pop_balloon(0));
        assert!(!state.pop_balloon(0));
        assert!(state.pop_balloon(1));
        assert_eq!(state.popped_count, 2);
    }

    #[test]
    fn test_counters_never_exceed_totals() {
        let mut state = card();
        for i in 0..20 {
            state.light_candle(i);
            state.pop_balloon(i);
            state.sequencer_tick();
            assert_bounds(&state);
        }
        assert_eq!(state.lit_count, 7);
        assert_eq!(state.popped_count, 5);
        assert!(!state.light_candle(7));
        assert!(!state.pop_balloon(5));
    }

    #[test]
    fn test_full_completion_shows_overlay() {
        let mut state = card();
        for i in 0..7 {
            state.light_candle(i);
        }
        assert!(!state.is_overlay_visible);
        for i in 0..5 {
            state.pop_balloon(i);
        }
        assert_eq!(state.lit_count, 7);
        assert_eq!(state.popped_count, 5);
        assert!(state.is_overlay_visible);
        assert!(!state.is_celebrating);
    }

    #[test]
    fn test_completion_order_independent() {
        let mut state = card();
        for i in 0..5 {
            state.pop_balloon(i);
        }
        for i in 0..6 {
            state.light_candle(i);
        }
        assert!(!state.is_overlay_visible);
        state.light_candle(6);
        assert!(state.is_overlay_visible);
    }

    #[test]
    fn test_celebrate_shows_overlay_before_completion() {
        let mut state = card();
        assert!(state.celebrate());
        assert!(state.is_celebrating);
        assert!(state.is_overlay_visible);
        assert_eq!(state.lit_count, 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_celebrate_once() {
        let mut state = card();
        assert!(state.celebrate());
        let snapshot = state.clone();
        assert!(!state.celebrate());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_sequencer_tick_stops_at_total() {
        let mut state = card();
        state.light_candle(0);
        state.light_candle(1);
        for _ in 0..4 {
            assert_eq!(state.sequencer_tick(), Tick::Advanced);
        }
        assert_eq!(state.sequencer_tick(), Tick::Finished);
        assert_eq!(state.lit_count, 7);
        assert_eq!(state.sequencer_tick(), Tick::Finished);
        assert_eq!(state.lit_count, 7);
    }

    #[test]
    fn test_resize_exact() {
        let mut state = card();
        state.resize(ViewportSize::new(1024.0, 768.0));
        assert_eq!(state.viewport, ViewportSize::new(1024.0, 768.0));
        state.resize(ViewportSize::new(375.5, 812.0));
        assert_eq!(state.viewport, ViewportSize::new(375.5, 812.0));
    }

    #[test]
    fn test_from_config() {
        let mut config = CardConfig::default();
        config.total_candles = 3;
        config.total_balloons = 2;
        let state = CardState::from_config(&config);
        assert_eq!((state.total_candles, state.total_balloons), (3, 2));
        assert_eq!((state.lit_count, state.popped_count), (0, 0));
    }
}
