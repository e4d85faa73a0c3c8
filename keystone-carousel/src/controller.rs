//! CarouselController: composition root for one populated carousel.
//!
//! The controller owns the state machine together with its two timers (the
//! transition-lock release and the autoplay scheduler) behind a single
//! mutex. Timer tasks only hold a `Weak` reference to that state, so
//! dropping or disposing the controller releases everything and any tick
//! already in flight becomes a no-op.
//!
//! All operations return immediately. Lock release happens later on the
//! runtime the controller was created on.

use std::sync::{Arc, Weak};
use std::time::Duration;

use keystone_config::CarouselSettings;
use keystone_config::validation::apply_guard_rails;
use keystone_contracts::navigation::DetailNavigator;
use keystone_contracts::viewport::ViewportProvider;
use keystone_model::{CarouselItem, ItemId};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::curator::WorkingSet;
use crate::error::CarouselError;
use crate::frame::{CarouselFrame, build_frame};
use crate::scheduler::AutoAdvanceScheduler;
use crate::state::{
    CarouselSnapshot, CarouselStateMachine, IgnoreReason, NavigationOutcome,
};
use crate::timer::TimerHandle;
use crate::window::project;

/// What `activate` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The focal card was activated and the navigator was asked to open it.
    OpenedDetail(ItemId),
    /// A side card was activated; the carousel tried to re-centre on it.
    Navigation(NavigationOutcome),
}

#[derive(Debug)]
struct Shared {
    machine: CarouselStateMachine,
    scheduler: AutoAdvanceScheduler,
    lock_timer: TimerHandle,
    lock_generation: u64,
    transition_lock: Duration,
    updates: watch::Sender<CarouselSnapshot>,
    disposed: bool,
}

type SharedRef = Weak<Mutex<Shared>>;

impl Shared {
    fn apply<F>(&mut self, this: &SharedRef, op: F) -> NavigationOutcome
    where
        F: FnOnce(&mut CarouselStateMachine) -> NavigationOutcome,
    {
        if self.disposed {
            return NavigationOutcome::Ignored(IgnoreReason::Disposed);
        }
        let outcome = op(&mut self.machine);
        match outcome {
            NavigationOutcome::Moved { .. } => self.arm_lock_release(this),
            NavigationOutcome::Ignored(reason) => {
                log::debug!("navigation ignored: {reason:?}");
            }
        }
        self.settle(this);
        outcome
    }

    fn arm_lock_release(&mut self, this: &SharedRef) {
        self.lock_generation += 1;
        let generation = self.lock_generation;
        let weak = this.clone();
        self.lock_timer.arm_once(self.transition_lock, move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut guard = shared.lock();
            guard.release_lock(&weak, generation);
        });
    }

    fn release_lock(&mut self, this: &SharedRef, generation: u64) {
        if self.disposed || generation != self.lock_generation {
            return;
        }
        if self.machine.complete_transition() {
            log::trace!("transition lock released");
        }
        self.settle(this);
    }

    fn auto_advance(&mut self, this: &SharedRef, generation: u64) {
        if self.disposed || !self.scheduler.is_current(generation) {
            log::trace!("ignoring stale autoplay tick {generation}");
            return;
        }
        self.apply(this, CarouselStateMachine::next);
    }

    /// Re-key the scheduler and publish the snapshot after any change.
    fn settle(&mut self, this: &SharedRef) {
        let snapshot = self.machine.snapshot();
        let weak = this.clone();
        self.scheduler.reconcile(snapshot, move |generation| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut guard = shared.lock();
            guard.auto_advance(&weak, generation);
        });
        self.updates.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.scheduler.cancel();
        self.lock_timer.cancel();
        log::debug!("carousel controller disposed");
    }
}

pub struct CarouselController {
    shared: Arc<Mutex<Shared>>,
    navigator: Arc<dyn DetailNavigator>,
    updates: watch::Receiver<CarouselSnapshot>,
    settings: CarouselSettings,
}

impl std::fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("snapshot", &self.snapshot())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl CarouselController {
    /// Build a controller on the current tokio runtime. Autoplay arms
    /// immediately when enabled and the working set is non-empty.
    ///
    /// Settings go through the same guard rails as the config loader, so a
    /// zero duration never reaches a timer.
    pub fn new(
        items: WorkingSet,
        navigator: Arc<dyn DetailNavigator>,
        settings: CarouselSettings,
    ) -> Result<Self, CarouselError> {
        let runtime =
            Handle::try_current().map_err(|_| CarouselError::NoRuntime)?;
        Self::with_runtime(runtime, items, navigator, settings)
    }

    pub fn with_runtime(
        runtime: Handle,
        items: WorkingSet,
        navigator: Arc<dyn DetailNavigator>,
        settings: CarouselSettings,
    ) -> Result<Self, CarouselError> {
        apply_guard_rails(&settings)?;

        let machine = CarouselStateMachine::with_autoplay(
            items,
            settings.autoplay_on_start,
        );
        let (sender, receiver) = watch::channel(machine.snapshot());

        let shared = Arc::new(Mutex::new(Shared {
            machine,
            scheduler: AutoAdvanceScheduler::new(
                runtime.clone(),
                settings.autoplay_interval,
            ),
            lock_timer: TimerHandle::new(runtime),
            lock_generation: 0,
            transition_lock: settings.transition_lock,
            updates: sender,
            disposed: false,
        }));
        {
            let weak = Arc::downgrade(&shared);
            shared.lock().settle(&weak);
        }

        Ok(Self {
            shared,
            navigator,
            updates: receiver,
            settings,
        })
    }

    pub fn next(&self) -> NavigationOutcome {
        self.apply(CarouselStateMachine::next)
    }

    pub fn prev(&self) -> NavigationOutcome {
        self.apply(CarouselStateMachine::prev)
    }

    pub fn go_to(&self, index: usize) -> NavigationOutcome {
        self.apply(move |machine| machine.go_to(index))
    }

    /// Flip autoplay and return the new value. After disposal the flag is
    /// frozen and the current value is returned.
    pub fn toggle_auto_play(&self) -> bool {
        let weak = Arc::downgrade(&self.shared);
        let mut guard = self.shared.lock();
        if guard.disposed {
            return guard.machine.is_auto_playing();
        }
        let auto_playing = guard.machine.toggle_auto_play();
        log::debug!("autoplay {}", if auto_playing { "on" } else { "off" });
        guard.settle(&weak);
        auto_playing
    }

    /// Handle a click on the card at `display_offset`.
    ///
    /// The focal card opens its detail view. A side card re-centres the
    /// carousel on the item it shows instead of navigating away.
    pub fn activate(&self, display_offset: i32) -> Activation {
        if display_offset != 0 {
            return Activation::Navigation(self.apply(|machine| {
                let target = project(
                    machine.items().as_slice(),
                    machine.focal_index(),
                )
                .and_then(|window| {
                    window
                        .iter()
                        .find(|entry| entry.display_offset == display_offset)
                        .map(|entry| entry.actual_index)
                });
                match target {
                    Some(index) => machine.go_to(index),
                    None if machine.is_empty() => {
                        NavigationOutcome::Ignored(IgnoreReason::Empty)
                    }
                    None => NavigationOutcome::Ignored(
                        IgnoreReason::OutsideWindow {
                            offset: display_offset,
                        },
                    ),
                }
            }));
        }

        let focal_id = {
            let guard = self.shared.lock();
            if guard.disposed {
                return Activation::Navigation(NavigationOutcome::Ignored(
                    IgnoreReason::Disposed,
                ));
            }
            match guard.machine.focal_item() {
                Some(item) => item.id.clone(),
                None => {
                    return Activation::Navigation(NavigationOutcome::Ignored(
                        IgnoreReason::Empty,
                    ));
                }
            }
        };

        // Navigator runs outside the lock so it may call back in.
        log::debug!("opening detail view for {focal_id}");
        self.navigator.navigate_to_detail(&focal_id);
        Activation::OpenedDetail(focal_id)
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        *self.updates.borrow()
    }

    /// Receiver that is notified after every observable state change.
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.updates.clone()
    }

    /// Render the current state for `viewport`. `None` for an empty set.
    pub fn frame(&self, viewport: &dyn ViewportProvider) -> Option<CarouselFrame> {
        let guard = self.shared.lock();
        build_frame(&guard.machine, viewport, guard.transition_lock)
    }

    pub fn focal_item(&self) -> Option<CarouselItem> {
        self.shared.lock().machine.focal_item().cloned()
    }

    pub fn len(&self) -> usize {
        self.shared.lock().machine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.lock().machine.is_empty()
    }

    pub fn is_autoplay_armed(&self) -> bool {
        self.shared.lock().scheduler.is_armed()
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// Cancel both timers and stop accepting operations. Idempotent.
    pub fn dispose(&self) {
        self.shared.lock().dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lock().disposed
    }

    fn apply<F>(&self, op: F) -> NavigationOutcome
    where
        F: FnOnce(&mut CarouselStateMachine) -> NavigationOutcome,
    {
        let weak = Arc::downgrade(&self.shared);
        self.shared.lock().apply(&weak, op)
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.dispose();
    }
}
