//! CarouselStateMachine: focal index, transition lock and autoplay flag.
//!
//! The machine is synchronous and clock-free. A successful navigation moves
//! it into [`CarouselPhase::Transitioning`]; the owner is responsible for
//! calling [`CarouselStateMachine::complete_transition`] once the lock
//! duration has elapsed (the controller does this with a timer).

use keystone_model::CarouselItem;

use crate::curator::WorkingSet;
use crate::window::wrap_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselPhase {
    #[default]
    Idle,
    /// Navigation is locked until the transition completes.
    Transitioning,
}

/// Why a navigation request left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// There is nothing to navigate.
    Empty,
    /// A previous move still holds the transition lock. Dropped, not queued.
    Transitioning,
    /// `go_to` targeted the card that is already focal.
    AlreadyFocused,
    OutOfRange { index: usize, len: usize },
    /// `activate` named an offset that is not part of the window.
    OutsideWindow { offset: i32 },
    /// The owning controller has been disposed.
    Disposed,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Moved { from: usize, to: usize },
    Ignored(IgnoreReason),
}

impl NavigationOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, NavigationOutcome::Moved { .. })
    }
}

/// Observable state, published to the view layer after every change.
///
/// These four fields are also exactly what the autoplay scheduler keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselSnapshot {
    pub focal_index: usize,
    pub len: usize,
    pub is_auto_playing: bool,
    pub is_transitioning: bool,
}

#[derive(Debug, Clone)]
pub struct CarouselStateMachine {
    items: WorkingSet,
    focal_index: usize,
    auto_playing: bool,
    phase: CarouselPhase,
}

impl CarouselStateMachine {
    /// Idle at index 0 with autoplay on.
    pub fn new(items: WorkingSet) -> Self {
        Self::with_autoplay(items, true)
    }

    pub fn with_autoplay(items: WorkingSet, auto_playing: bool) -> Self {
        Self {
            items,
            focal_index: 0,
            auto_playing,
            phase: CarouselPhase::Idle,
        }
    }

    pub fn items(&self) -> &WorkingSet {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn focal_index(&self) -> usize {
        self.focal_index
    }

    pub fn focal_item(&self) -> Option<&CarouselItem> {
        self.items.get(self.focal_index)
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == CarouselPhase::Transitioning
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            focal_index: self.focal_index,
            len: self.items.len(),
            is_auto_playing: self.auto_playing,
            is_transitioning: self.is_transitioning(),
        }
    }

    pub fn next(&mut self) -> NavigationOutcome {
        self.step(1)
    }

    pub fn prev(&mut self) -> NavigationOutcome {
        self.step(-1)
    }

    /// Jump directly to `index`. Targeting the focal card is a no-op that
    /// does not take the transition lock.
    pub fn go_to(&mut self, index: usize) -> NavigationOutcome {
        if let Err(reason) = self.ensure_navigable() {
            return NavigationOutcome::Ignored(reason);
        }
        let len = self.items.len();
        if index >= len {
            return NavigationOutcome::Ignored(IgnoreReason::OutOfRange {
                index,
                len,
            });
        }
        if index == self.focal_index {
            return NavigationOutcome::Ignored(IgnoreReason::AlreadyFocused);
        }
        self.begin_transition(index)
    }

    /// Flip autoplay. Allowed in any phase; never touches the focal index
    /// or the lock. Returns the new value.
    pub fn toggle_auto_play(&mut self) -> bool {
        self.auto_playing = !self.auto_playing;
        self.auto_playing
    }

    /// Release the transition lock. Returns false when already idle.
    pub fn complete_transition(&mut self) -> bool {
        if self.phase == CarouselPhase::Idle {
            return false;
        }
        self.phase = CarouselPhase::Idle;
        true
    }

    fn step(&mut self, delta: i32) -> NavigationOutcome {
        if let Err(reason) = self.ensure_navigable() {
            return NavigationOutcome::Ignored(reason);
        }
        let target = wrap_index(self.focal_index, delta, self.items.len());
        self.begin_transition(target)
    }

    fn ensure_navigable(&self) -> Result<(), IgnoreReason> {
        if self.items.is_empty() {
            return Err(IgnoreReason::Empty);
        }
        if self.is_transitioning() {
            return Err(IgnoreReason::Transitioning);
        }
        Ok(())
    }

    fn begin_transition(&mut self, to: usize) -> NavigationOutcome {
        let from = self.focal_index;
        self.focal_index = to;
        self.phase = CarouselPhase::Transitioning;
        log::debug!("carousel moved {from} -> {to}");
        NavigationOutcome::Moved { from, to }
    }
}
