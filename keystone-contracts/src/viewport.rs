/// Capability for reading the current width of the host viewport.
///
/// Implementations may poll the window on every call or cache a value
/// pushed from resize events; callers read it at render time and never
/// hold on to the result.
pub trait ViewportProvider: Send + Sync {
    /// Width of the viewport in logical pixels.
    fn viewport_width(&self) -> f32;
}

impl ViewportProvider for f32 {
    fn viewport_width(&self) -> f32 {
        *self
    }
}
