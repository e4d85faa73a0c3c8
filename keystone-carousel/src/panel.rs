//! CarouselPanel: the section as the host page sees it.
//!
//! Loading the working set is a one-shot async step. Whatever the source
//! returns decides which of the four states the panel settles in; only the
//! populated state owns a controller and therefore timers.

use std::sync::Arc;

use keystone_config::CarouselSettings;
use keystone_config::validation::apply_guard_rails;
use keystone_contracts::navigation::DetailNavigator;
use keystone_contracts::source::ItemSource;
use keystone_contracts::viewport::ViewportProvider;

use crate::constants::notices;
use crate::controller::{Activation, CarouselController};
use crate::curator::curate_with_limit;
use crate::error::CarouselError;
use crate::frame::CarouselFrame;
use crate::messages::CarouselMessage;
use crate::state::NavigationOutcome;

#[derive(Debug, Default)]
pub enum CarouselPanel {
    #[default]
    Loading,
    Failed(CarouselError),
    Empty,
    Ready(CarouselController),
}

/// What the view should draw for the panel right now.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselView {
    Loading { message: &'static str },
    Error { message: &'static str },
    Empty { message: &'static str },
    Ready(CarouselFrame),
}

/// Result of routing one [`CarouselMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    Navigation(NavigationOutcome),
    AutoPlay(bool),
    Activation(Activation),
    /// The panel holds no carousel; the message was dropped.
    Inert,
}

impl CarouselPanel {
    /// Fetch from `source` and settle in the matching state.
    ///
    /// Settings that fail the config guard rails leave the panel `Failed`
    /// without touching the source. A failed fetch is logged and kept in the panel rather than
    /// propagated, so the host page renders a placeholder instead of
    /// crashing.
    pub async fn load(
        source: &dyn ItemSource,
        navigator: Arc<dyn DetailNavigator>,
        settings: CarouselSettings,
    ) -> Self {
        if let Err(err) = apply_guard_rails(&settings) {
            log::warn!("refusing to load carousel: {err}");
            return Self::Failed(err.into());
        }

        let origin = source.describe();
        log::debug!("loading carousel items from {origin}");

        let raw = match source.fetch_items().await {
            Ok(items) => items,
            Err(err) => {
                log::warn!("carousel items unavailable from {origin}: {err}");
                return Self::Failed(err.into());
            }
        };

        let fetched = raw.len();
        let working_set = curate_with_limit(raw, settings.max_items);
        log::info!(
            "{} ongoing projects selected from {fetched} items",
            working_set.len()
        );
        if working_set.is_empty() {
            return Self::Empty;
        }

        match CarouselController::new(working_set, navigator, settings) {
            Ok(controller) => Self::Ready(controller),
            Err(err) => {
                log::warn!("failed to start carousel controller: {err}");
                Self::Failed(err)
            }
        }
    }

    pub fn controller(&self) -> Option<&CarouselController> {
        match self {
            Self::Ready(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn update(&self, message: CarouselMessage) -> MessageOutcome {
        let Some(controller) = self.controller() else {
            log::trace!("dropping {message:?}; carousel not populated");
            return MessageOutcome::Inert;
        };

        match message {
            CarouselMessage::Prev => {
                MessageOutcome::Navigation(controller.prev())
            }
            CarouselMessage::Next => {
                MessageOutcome::Navigation(controller.next())
            }
            CarouselMessage::GoTo(index) => {
                MessageOutcome::Navigation(controller.go_to(index))
            }
            CarouselMessage::ToggleAutoPlay => {
                MessageOutcome::AutoPlay(controller.toggle_auto_play())
            }
            CarouselMessage::Activate(offset) => {
                MessageOutcome::Activation(controller.activate(offset))
            }
        }
    }

    pub fn view(&self, viewport: &dyn ViewportProvider) -> CarouselView {
        match self {
            Self::Loading => CarouselView::Loading {
                message: notices::LOADING,
            },
            Self::Failed(_) => CarouselView::Error {
                message: notices::LOAD_FAILED,
            },
            Self::Empty => CarouselView::Empty {
                message: notices::EMPTY,
            },
            Self::Ready(controller) => match controller.frame(viewport) {
                Some(frame) => CarouselView::Ready(frame),
                None => CarouselView::Empty {
                    message: notices::EMPTY,
                },
            },
        }
    }
}
