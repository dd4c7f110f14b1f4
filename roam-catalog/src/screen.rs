use roam_core::ViewState;
use serde::Serialize;

use crate::itinerary::{project, PackageView, ProjectionOptions};

pub const LOADING_TEXT: &str = "Loading package details...";
pub const NOT_FOUND_TEXT: &str = "No package details found.";

/// What the package detail page shows for a given view state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", content = "content", rename_all = "snake_case")]
pub enum Screen {
    Loading,
    Error(String),
    NotFound,
    Package(Box<PackageView>),
}

impl Screen {
    pub fn from_state(state: &ViewState, options: &ProjectionOptions) -> Self {
        match state {
            ViewState::Loading => Screen::Loading,
            ViewState::Failed(message) => Screen::Error(message.clone()),
            ViewState::Ready(None) => Screen::NotFound,
            ViewState::Ready(Some(document)) => Screen::Package(Box::new(project(document, options))),
        }
    }

    /// Text of the placeholder screens; `None` for a rendered package.
    pub fn message(&self) -> Option<String> {
        match self {
            Screen::Loading => Some(LOADING_TEXT.to_string()),
            Screen::Error(message) => Some(format!("Error: {}", message)),
            Screen::NotFound => Some(NOT_FOUND_TEXT.to_string()),
            Screen::Package(_) => None,
        }
    }
}
