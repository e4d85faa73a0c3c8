//! Keystone projects carousel
//!
//! Engine behind the "ongoing projects" showcase: a circular, auto-advancing
//! carousel that shows five cards at a time around a focal card.
//!
//! Notes
//! - Pure pieces (`curator`, `window`, `style`, `state`) are synchronous and
//!   clock-free; they can be used without a runtime.
//! - `CarouselController` owns the timers and must be created inside a tokio
//!   runtime. `CarouselPanel` wraps the load lifecycle around it.

pub mod card;
pub mod constants;
pub mod controller;
pub mod curator;
pub mod error;
pub mod frame;
pub mod messages;
pub mod panel;
pub mod scheduler;
pub mod sources;
pub mod state;
pub mod style;
pub mod timer;
pub mod viewport;
pub mod window;

pub use controller::{Activation, CarouselController};
pub use curator::{WorkingSet, curate, curate_with_limit};
pub use error::CarouselError;
pub use frame::{CarouselFrame, ControlState, Indicator, RenderedCard};
pub use messages::CarouselMessage;
pub use panel::{CarouselPanel, CarouselView, MessageOutcome};
pub use state::{
    CarouselPhase, CarouselSnapshot, CarouselStateMachine, IgnoreReason,
    NavigationOutcome,
};
pub use style::{DisplayStyle, style};
pub use viewport::{FixedViewport, SharedViewport, ViewportBreakpoint};
pub use window::{WindowEntry, project};

pub mod prelude {
    pub use super::{
        Activation, CarouselController, CarouselMessage, CarouselPanel,
        CarouselSnapshot, CarouselView, NavigationOutcome, ViewportBreakpoint,
    };
    pub use keystone_config::CarouselSettings;
    pub use keystone_contracts::prelude::*;
    pub use keystone_model::{CarouselItem, ItemId, ItemStatus};
}
