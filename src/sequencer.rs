//! Celebration Sequencer
//!
//! Timed state machine that lights candles on a fixed interval:
//! `Idle -> Celebrating -> Done`. The timer source is a `Scheduler`,
//! so tests can drive it with a virtual clock.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::Interval;

use crate::state::Tick;

/// Source of periodic callbacks.
///
/// Ticks are delivered until the returned handle is dropped.
pub trait Scheduler {
    type Handle: 'static;

    fn every<F>(&self, period: Duration, tick: F) -> Self::Handle
    where
        F: FnMut() + 'static;
}

/// Browser `setInterval` via gloo-timers
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every<F>(&self, period: Duration, tick: F) -> Interval
    where
        F: FnMut() + 'static,
    {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, tick)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Celebrating,
    Done,
}

struct Shared<H> {
    phase: Phase,
    ticks: usize,
    handle: Option<H>,
}

/// Drives a step function on a timer until it reports `Tick::Finished`.
///
/// Runs at most once. Dropping the sequencer cancels a running timer.
pub struct Sequencer<S: Scheduler> {
    scheduler: S,
    period: Duration,
    shared: Rc<RefCell<Shared<S::Handle>>>,
}

impl<S: Scheduler> Sequencer<S> {
    pub fn new(scheduler: S, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            shared: Rc::new(RefCell::new(Shared {
                phase: Phase::Idle,
                ticks: 0,
                handle: None,
            })),
        }
    }

    pub fn phase(&self) -> Phase {
        self.shared.borrow().phase
    }

    /// Start the timer. `step` runs once per tick until it returns
    /// `Tick::Finished`, then the timer cancels itself.
    ///
    /// Returns false (and starts nothing) unless the sequencer is idle.
    pub fn start<F>(&self, mut step: F) -> bool
    where
        F: FnMut() -> Tick + 'static,
    {
        if self.phase() != Phase::Idle {
            return false;
        }
        self.shared.borrow_mut().phase = Phase::Celebrating;

        let shared: Weak<RefCell<Shared<S::Handle>>> = Rc::downgrade(&self.shared);
        let handle = self.scheduler.every(self.period, move || {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            if shared.borrow().phase != Phase::Celebrating {
                return;
            }

            let tick = step();

            let finished = {
                let mut inner = shared.borrow_mut();
                inner.ticks += 1;
                if tick == Tick::Finished {
                    inner.phase = Phase::Done;
                    inner.handle.take()
                } else {
                    None
                }
            };
            if finished.is_some() {
                tracing::debug!(ticks = shared.borrow().ticks, "sequencer finished");
            }
            drop(finished);
        });

        self.shared.borrow_mut().handle = Some(handle);
        tracing::debug!(period_ms = self.period.as_millis() as u64, "sequencer started");
        true
    }

    /// Stop a running timer. The sequencer cannot be restarted.
    pub fn cancel(&self) {
        let handle = {
            let mut inner = self.shared.borrow_mut();
            if inner.phase == Phase::Celebrating {
                inner.phase = Phase::Done;
            }
            inner.handle.take()
        };
        if handle.is_some() {
            tracing::debug!(ticks = self.shared.borrow().ticks, "sequencer cancelled");
        }
    }
}

impl<S: Scheduler> Drop for Sequencer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}


#[cfg(test)]
mod tests {
    use super::virtual_clock::VirtualClock;
    use super::*;
    use crate::state::CardState;

    const PERIOD: Duration = Duration::from_millis(300);

    fn setup() -> (VirtualClock, Sequencer<VirtualClock>, Rc<RefCell<CardState>>) {
        let clock = VirtualClock::default();
        let sequencer = Sequencer::new(clock.clone(), PERIOD);
        let state = Rc::new(RefCell::new(CardState::new(7, 5)));
        (clock, sequencer, state)
    }

    /// Step function over `state` that also counts its calls
    fn stepper(state: &Rc<RefCell<CardState>>, calls: &Rc<RefCell<usize>>) -> impl FnMut() -> Tick + 'static {
        let state = Rc::clone(state);
        let calls = Rc::clone(calls);
        move || {
            *calls.borrow_mut() += 1;
            state.borrow_mut().sequencer_tick()
        }
    }

    fn counter() -> Rc<RefCell<usize>> {
        Rc::new(RefCell::new(0))
    }

    #[test]
    fn test_lights_one_candle_per_tick() {
        let (clock, sequencer, state) = setup();
        assert_eq!(sequencer.phase(), Phase::Idle);
        assert!(sequencer.start(stepper(&state, &counter())));
        assert_eq!(sequencer.phase(), Phase::Celebrating);

        clock.advance(Duration::from_millis(299));
        assert_eq!(state.borrow().lit_count, 0);

        for expected in 1..=6 {
            clock.advance(PERIOD);
            assert_eq!(state.borrow().lit_count, expected);
            assert_eq!(sequencer.phase(), Phase::Celebrating);
        }
    }

    #[test]
    fn test_stops_after_last_candle() {
        let (clock, sequencer, state) = setup();
        let calls = counter();
        sequencer.start(stepper(&state, &calls));

        clock.advance(PERIOD * 7);
        assert_eq!(state.borrow().lit_count, 7);
        assert_eq!(sequencer.phase(), Phase::Done);
        assert_eq!(*calls.borrow(), 7);
        assert_eq!(clock.active_timers(), 0);

        clock.advance(PERIOD * 3);
        assert_eq!(state.borrow().lit_count, 7);
        assert_eq!(*calls.borrow(), 7);
    }

    #[test]
    fn test_start_twice_is_noop() {
        let (clock, sequencer, state) = setup();
        assert!(sequencer.start(stepper(&state, &counter())));
        assert!(!sequencer.start(stepper(&state, &counter())));
        assert_eq!(clock.active_timers(), 1);

        clock.advance(PERIOD * 2);
        assert_eq!(state.borrow().lit_count, 2);
    }

    #[test]
    fn test_cannot_restart_when_done() {
        let (clock, sequencer, state) = setup();
        sequencer.start(stepper(&state, &counter()));
        clock.advance(PERIOD * 10);
        assert!(!sequencer.start(stepper(&state, &counter())));
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn test_picks_up_from_manual_progress() {
        let (clock, sequencer, state) = setup();
        for i in 0..5 {
            state.borrow_mut().light_candle(i);
        }
        let calls = counter();
        sequencer.start(stepper(&state, &calls));
        clock.advance(PERIOD * 2);
        assert_eq!(state.borrow().lit_count, 7);
        assert_eq!(sequencer.phase(), Phase::Done);
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_finishes_immediately_when_all_lit() {
        let (clock, sequencer, state) = setup();
        for i in 0..7 {
            state.borrow_mut().light_candle(i);
        }
        sequencer.start(stepper(&state, &counter()));
        clock.advance(PERIOD);
        assert_eq!(sequencer.phase(), Phase::Done);
        assert_eq!(state.borrow().lit_count, 7);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let (clock, sequencer, state) = setup();
        sequencer.start(stepper(&state, &counter()));
        clock.advance(PERIOD * 2);
        assert_eq!(clock.active_timers(), 1);

        drop(sequencer);
        assert_eq!(clock.active_timers(), 0);

        clock.advance(PERIOD * 10);
        assert_eq!(state.borrow().lit_count, 2);
    }

    #[test]
    fn test_cancel_is_terminal() {
        let (clock, sequencer, state) = setup();
        sequencer.start(stepper(&state, &counter()));
        sequencer.cancel();
        assert_eq!(sequencer.phase(), Phase::Done);
        clock.advance(PERIOD * 5);
        assert_eq!(state.borrow().lit_count, 0);
    }

    #[test]
    fn test_celebration_scenario() {
        let (clock, sequencer, state) = setup();
        assert!(state.borrow_mut().celebrate());
        {
            let s = state.borrow();
            assert!(s.is_celebrating);
            assert!(s.is_overlay_visible);
            assert_eq!(s.lit_count, 0);
        }
        sequencer.start(stepper(&state, &counter()));

        clock.advance(PERIOD * 7);
        assert_eq!(state.borrow().lit_count, 7);
        assert_eq!(sequencer.phase(), Phase::Done);

        assert!(!state.borrow_mut().celebrate());
        assert!(!sequencer.start(stepper(&state, &counter())));
        clock.advance(PERIOD);
        assert_eq!(state.borrow().lit_count, 7);
    }
}
