//! Maps a card's display offset to its visual transform.
//!
//! The focal card sits flat at full size; each tier away from it shrinks,
//! fades, dims, and turns toward the centre while being pushed outward by
//! the breakpoint's spacing. Renderers animate between styles over the
//! configured transition lock.

use crate::constants::{spacing, tiers};
use crate::viewport::ViewportBreakpoint;

/// Horizontal spacing for side cards at a breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Distance of the first side card from centre (px).
    pub base: f32,
    /// Extra distance for every tier beyond the first (px).
    pub increment: f32,
}

impl Spacing {
    pub const fn for_breakpoint(breakpoint: ViewportBreakpoint) -> Self {
        let (base, increment) = match breakpoint {
            ViewportBreakpoint::Xs => spacing::XS,
            ViewportBreakpoint::Sm => spacing::SM,
            ViewportBreakpoint::Md => spacing::MD,
            ViewportBreakpoint::Lg => spacing::LG,
            ViewportBreakpoint::Xl => spacing::XL,
        };
        Self { base, increment }
    }
}

/// Transform descriptor for one rendered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayStyle {
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    /// Horizontal translation from centre (px); negative is left.
    pub x_offset: f32,
    pub rotate_y_deg: f32,
    pub brightness: f32,
}

/// Compute the style for `display_offset` at `breakpoint`.
///
/// Offsets beyond the window radius cannot occur with a five-card window;
/// they get the dimmest tier so a wider window still renders sensibly.
pub fn style(display_offset: i32, breakpoint: ViewportBreakpoint) -> DisplayStyle {
    let tier = (display_offset.unsigned_abs() as usize).min(3);
    let sign = if display_offset > 0 { 1.0 } else { -1.0 };
    let Spacing { base, increment } = Spacing::for_breakpoint(breakpoint);

    let x_offset = match tier {
        0 => 0.0,
        n => sign * (base + (n - 1) as f32 * increment),
    };

    DisplayStyle {
        scale: tiers::SCALE[tier],
        opacity: tiers::OPACITY[tier],
        z_index: tiers::Z_INDEX[tier],
        x_offset,
        rotate_y_deg: sign * -tiers::ROTATE_Y_DEG[tier],
        brightness: tiers::BRIGHTNESS[tier],
    }
}
