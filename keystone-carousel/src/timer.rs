//! Owned timer resource backed by a tokio task.
//!
//! A `TimerHandle` holds at most one pending task. Arming always cancels
//! whatever was pending first, and dropping the handle cancels too, so a
//! handle can never leak a second live timer.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug)]
pub struct TimerHandle {
    runtime: Handle,
    task: Option<JoinHandle<()>>,
}

impl TimerHandle {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            task: None,
        }
    }

    /// Call `on_fire` every `period`, first after one full period.
    pub fn arm_repeating<F>(&mut self, period: Duration, mut on_fire: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.cancel();
        self.task = Some(self.runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            // A stalled loop should not replay a burst of missed advances.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                on_fire();
            }
        }));
    }

    /// Call `on_fire` once after `delay`.
    pub fn arm_once<F>(&mut self, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.task = Some(self.runtime.spawn(async move {
            time::sleep(delay).await;
            on_fire();
        }));
    }

    /// Abort the pending task, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }

    /// True while a task is pending and has not run to completion.
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn repeating_timer_fires_each_period() {
        let mut timer = TimerHandle::new(Handle::current());
        let (count, on_fire) = counter();
        timer.arm_repeating(Duration::from_millis(100), on_fire);

        time::sleep(Duration::from_millis(350)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(timer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_replaces_the_previous_timer() {
        let mut timer = TimerHandle::new(Handle::current());
        let (first, on_first) = counter();
        let (second, on_second) = counter();

        timer.arm_repeating(Duration::from_millis(100), on_first);
        timer.arm_repeating(Duration::from_millis(100), on_second);

        time::sleep(Duration::from_millis(250)).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_and_drop_stop_pending_work() {
        let (count, on_fire) = counter();
        let mut timer = TimerHandle::new(Handle::current());
        timer.arm_once(Duration::from_millis(50), on_fire);
        assert!(timer.cancel());
        assert!(!timer.cancel());

        let (dropped_count, on_dropped) = counter();
        {
            let mut scoped = TimerHandle::new(Handle::current());
            scoped.arm_repeating(Duration::from_millis(10), on_dropped);
        }

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(dropped_count.load(Ordering::SeqCst), 0);
        assert!(!timer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn one_shot_disarms_after_firing() {
        let mut timer = TimerHandle::new(Handle::current());
        let (count, on_fire) = counter();
        timer.arm_once(Duration::from_millis(30), on_fire);
        assert!(timer.is_armed());

        time::sleep(Duration::from_millis(31)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!timer.is_armed());
    }
}
