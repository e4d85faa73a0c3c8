//! Breakpoint classification and viewport providers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use keystone_contracts::viewport::ViewportProvider;

use crate::constants::breakpoints;

/// Responsive bucket derived purely from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewportBreakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl ViewportBreakpoint {
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Map a width in px to its bucket. Non-finite or negative widths are
    /// treated as the narrowest layout.
    pub fn classify(width_px: f32) -> Self {
        if width_px.is_nan() || width_px < breakpoints::SM {
            Self::Xs
        } else if width_px < breakpoints::MD {
            Self::Sm
        } else if width_px < breakpoints::LG {
            Self::Md
        } else if width_px < breakpoints::XL {
            Self::Lg
        } else {
            Self::Xl
        }
    }

    /// Read the provider now and classify the result.
    pub fn current(viewport: &dyn ViewportProvider) -> Self {
        Self::classify(viewport.viewport_width())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl std::fmt::Display for ViewportBreakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viewport of a fixed width, for headless rendering and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub f32);

impl ViewportProvider for FixedViewport {
    fn viewport_width(&self) -> f32 {
        self.0
    }
}

/// Width cell updated from the host's resize events.
///
/// Clones share the same cell, so the window layer can hold one clone and
/// push widths while the renderer reads through another.
#[derive(Debug, Clone)]
pub struct SharedViewport {
    width_bits: Arc<AtomicU32>,
}

impl SharedViewport {
    pub fn new(width_px: f32) -> Self {
        Self {
            width_bits: Arc::new(AtomicU32::new(width_px.to_bits())),
        }
    }

    pub fn set_width(&self, width_px: f32) {
        let previous = self
            .width_bits
            .swap(width_px.to_bits(), Ordering::Relaxed);
        let before = ViewportBreakpoint::classify(f32::from_bits(previous));
        let after = ViewportBreakpoint::classify(width_px);
        if before != after {
            log::debug!("viewport breakpoint changed {before} -> {after}");
        }
    }
}

impl ViewportProvider for SharedViewport {
    fn viewport_width(&self) -> f32 {
        f32::from_bits(self.width_bits.load(Ordering::Relaxed))
    }
}
