//! AutoAdvanceScheduler: the single recurring timer behind autoplay.
//!
//! The timer is alive exactly when autoplay is on, the carousel is idle and
//! there is something to show. Whenever any field of the
//! [`CarouselSnapshot`] changes the timer is torn down and, if the rule
//! still holds, armed afresh with a new generation number. Tick callbacks
//! carry the generation they were armed with so a tick from a superseded
//! timer can be recognised and ignored.

use std::time::Duration;

use tokio::runtime::Handle;

use crate::state::CarouselSnapshot;
use crate::timer::TimerHandle;

/// Owner of the autoplay timer.
///
/// The timer is down while a transition holds the lock, so only the first
/// automatic advance lands one `interval` after arming. Every later one
/// also waits out the lock, giving a steady-state period of
/// `autoplay_interval + transition_lock`: 4.6 s with the defaults, with
/// advances at 4.0 s, 8.6 s and 13.2 s.
#[derive(Debug)]
pub struct AutoAdvanceScheduler {
    interval: Duration,
    timer: TimerHandle,
    generation: u64,
    last_key: Option<CarouselSnapshot>,
}

impl AutoAdvanceScheduler {
    pub fn new(runtime: Handle, interval: Duration) -> Self {
        Self {
            interval,
            timer: TimerHandle::new(runtime),
            generation: 0,
            last_key: None,
        }
    }

    /// Whether a timer should be running for `snapshot`.
    pub fn should_run(snapshot: &CarouselSnapshot) -> bool {
        snapshot.is_auto_playing
            && !snapshot.is_transitioning
            && snapshot.len > 0
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Bring the timer in line with `snapshot`.
    ///
    /// No-op when the snapshot is unchanged since the last call, so an
    /// ignored navigation does not restart the countdown. `on_tick` receives
    /// the generation of the timer that fired. Returns true when a new timer
    /// was armed.
    pub fn reconcile<F>(&mut self, snapshot: CarouselSnapshot, mut on_tick: F) -> bool
    where
        F: FnMut(u64) + Send + 'static,
    {
        if self.last_key == Some(snapshot) {
            return false;
        }
        self.last_key = Some(snapshot);

        if self.timer.cancel() {
            log::trace!("autoplay timer {} cancelled", self.generation);
        }
        if !Self::should_run(&snapshot) {
            return false;
        }

        self.generation += 1;
        let generation = self.generation;
        self.timer
            .arm_repeating(self.interval, move || on_tick(generation));
        log::trace!(
            "autoplay timer {generation} armed for {:?}",
            self.interval
        );
        true
    }

    /// True when `generation` belongs to the timer that is currently armed.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation && self.timer.is_armed()
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Cancel unconditionally and forget the last key, so a later
    /// `reconcile` always re-evaluates.
    pub fn cancel(&mut self) {
        if self.timer.cancel() {
            log::trace!("autoplay timer {} cancelled", self.generation);
        }
        self.last_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time;

    fn snapshot(auto: bool, transitioning: bool, len: usize) -> CarouselSnapshot {
        CarouselSnapshot {
            focal_index: 0,
            len,
            is_auto_playing: auto,
            is_transitioning: transitioning,
        }
    }

    #[test]
    fn arming_rule() {
        assert!(AutoAdvanceScheduler::should_run(&snapshot(true, false, 3)));
        assert!(!AutoAdvanceScheduler::should_run(&snapshot(false, false, 3)));
        assert!(!AutoAdvanceScheduler::should_run(&snapshot(true, true, 3)));
        assert!(!AutoAdvanceScheduler::should_run(&snapshot(true, false, 0)));
    }

    #[tokio::test(start_paused = true)]
    async fn unchanged_snapshot_keeps_the_running_timer() {
        let mut scheduler =
            AutoAdvanceScheduler::new(Handle::current(), Duration::from_secs(4));
        assert!(scheduler.reconcile(snapshot(true, false, 3), |_| {}));
        assert!(!scheduler.reconcile(snapshot(true, false, 3), |_| {}));
        assert!(scheduler.is_current(1));
    }

    #[tokio::test(start_paused = true)]
    async fn only_the_latest_generation_ticks() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = AutoAdvanceScheduler::new(
            Handle::current(),
            Duration::from_millis(100),
        );

        for focal_index in 0..3 {
            let log = Arc::clone(&fired);
            let key = CarouselSnapshot {
                focal_index,
                ..snapshot(true, false, 3)
            };
            scheduler.reconcile(key, move |generation| {
                log.lock().unwrap().push(generation);
            });
        }

        time::sleep(Duration::from_millis(250)).await;
        assert_eq!(*fired.lock().unwrap(), vec![3, 3]);
        assert!(!scheduler.is_current(1));
        assert!(scheduler.is_current(3));
    }

    #[tokio::test(start_paused = true)]
    async fn disarms_when_rule_stops_holding() {
        let mut scheduler =
            AutoAdvanceScheduler::new(Handle::current(), Duration::from_secs(4));
        scheduler.reconcile(snapshot(true, false, 3), |_| {});
        assert!(scheduler.is_armed());

        assert!(!scheduler.reconcile(snapshot(true, true, 3), |_| {}));
        assert!(!scheduler.is_armed());

        scheduler.reconcile(snapshot(true, false, 3), |_| {});
        scheduler.cancel();
        assert!(!scheduler.is_armed());
    }
}
