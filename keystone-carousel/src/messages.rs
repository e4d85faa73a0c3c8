//! Interaction messages emitted by the view layer.

/// One user interaction with the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMessage {
    // Navigation buttons
    Prev,
    Next,
    // Indicator strip
    GoTo(usize),
    // Autoplay toggle
    ToggleAutoPlay,
    /// Click on the card rendered at this display offset.
    Activate(i32),
}
