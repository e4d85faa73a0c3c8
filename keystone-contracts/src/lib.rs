//! Trait surfaces for the collaborators that sit outside the carousel:
//! the remote content source, the detail-page router and the host window.

pub mod navigation;
pub mod source;
pub mod viewport;

/// Frequently used collaborator traits for UI and orchestration crates.
pub mod prelude {
    pub use super::navigation::DetailNavigator;
    pub use super::source::{ItemSource, SourceError};
    pub use super::viewport::ViewportProvider;
}
