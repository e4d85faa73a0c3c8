//! Carousel constants
//!
//! Layout and presentation constants for the projects carousel. Timing
//! values (transition lock, autoplay interval, working-set cap) live in
//! `keystone_config::constants` and reach the engine through
//! [`keystone_config::CarouselSettings`], so they are not repeated here.

/// Geometry of the visible window around the focal card.
pub mod window {
    /// Cards shown on each side of the focal card.
    pub const RADIUS: i32 = 2;
    /// Total cards in the window (focal plus both sides).
    pub const SIZE: usize = (RADIUS as usize) * 2 + 1;
}

/// Lower bounds (inclusive, px) of each breakpoint above `xs`.
pub mod breakpoints {
    pub const SM: f32 = 600.0;
    pub const MD: f32 = 900.0;
    pub const LG: f32 = 1200.0;
    pub const XL: f32 = 1536.0;
}

/// Horizontal spacing of side cards per breakpoint as `(base, increment)`.
/// The first side card sits `base` px from centre and every further tier
/// adds `increment`. Values grow monotonically from `xs` to `xl`.
pub mod spacing {
    pub const XS: (f32, f32) = (110.0, 70.0);
    pub const SM: (f32, f32) = (170.0, 110.0);
    pub const MD: (f32, f32) = (230.0, 150.0);
    pub const LG: (f32, f32) = (290.0, 190.0);
    pub const XL: (f32, f32) = (340.0, 220.0);
}

/// Per-tier visual parameters, indexed by `|display offset|`. The last row
/// covers any offset beyond the window radius.
pub mod tiers {
    pub const SCALE: [f32; 4] = [1.0, 0.85, 0.70, 0.50];
    pub const OPACITY: [f32; 4] = [1.0, 0.8, 0.6, 0.3];
    pub const Z_INDEX: [i32; 4] = [50, 40, 30, 10];
    /// Rotation magnitude in degrees; side cards turn toward the centre.
    pub const ROTATE_Y_DEG: [f32; 4] = [0.0, 10.0, 20.0, 30.0];
    pub const BRIGHTNESS: [f32; 4] = [1.0, 0.8, 0.6, 0.4];
}

/// Fallbacks for records with missing fields.
pub mod placeholders {
    pub const IMAGE: &str = "/images/project-placeholder.jpg";
    pub const MISSING_LABEL: &str = "N/A";
    pub const UNTITLED: &str = "Untitled project";
    /// `chrono` format for card dates, e.g. `Mar 1, 2024`.
    pub const DATE_FORMAT: &str = "%b %-d, %Y";
}

/// Copy for the non-interactive render branches.
pub mod notices {
    pub const LOADING: &str = "Loading ongoing projects...";
    pub const EMPTY: &str = "No ongoing projects at the moment.";
    pub const LOAD_FAILED: &str =
        "We couldn't load our ongoing projects. Please try again later.";
}
