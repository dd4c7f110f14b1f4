use roam_shared::PackageDocument;
use serde::Serialize;

use crate::source::PackageId;
use crate::FetchResult;

/// Visible state of a package detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewState {
    Loading,
    /// `None` when the service answered with an empty document.
    Ready(Option<PackageDocument>),
    Failed(String),
}

/// Correlates an outstanding fetch with the navigation that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    id: PackageId,
}

impl FetchTicket {
    pub fn id(&self) -> &PackageId {
        &self.id
    }
}

/// What happened to a fetch result handed to [`PackageDetailView::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The view moved on to another identifier (or was torn down); result dropped.
    Stale,
}

/// Fetch-and-state lifecycle for one package detail view.
///
/// Every navigation bumps a generation counter and hands out a
/// [`FetchTicket`]; only the ticket of the latest generation may move the
/// view out of `Loading`.
#[derive(Debug)]
pub struct PackageDetailView {
    id: Option<PackageId>,
    generation: u64,
    state: ViewState,
}

impl PackageDetailView {
    pub fn new() -> Self {
        Self {
            id: None,
            generation: 0,
            state: ViewState::Loading,
        }
    }

    pub fn id(&self) -> Option<&PackageId> {
        self.id.as_ref()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Activate the view for `id`.
    ///
    /// Returns the ticket for the fetch to issue, or `None` when `id` is
    /// already the active identifier.
    pub fn navigate(&mut self, id: PackageId) -> Option<FetchTicket> {
        if self.id.as_ref() == Some(&id) {
            return None;
        }
        self.id = Some(id.clone());
        Some(self.restart(id))
    }

    /// Force a new fetch for the active identifier.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        let id = self.id.clone()?;
        Some(self.restart(id))
    }

    /// Transition: Loading → Ready | Failed, guarded by the ticket.
    pub fn complete(&mut self, ticket: &FetchTicket, outcome: FetchResult) -> Completion {
        if !self.is_current(ticket) {
            tracing::debug!(
                "Dropping stale result for package {} (generation {}, current {})",
                ticket.id,
                ticket.generation,
                self.generation
            );
            return Completion::Stale;
        }

        self.state = match outcome {
            Ok(document) => ViewState::Ready(document),
            Err(err) => {
                tracing::warn!("Error fetching package details for {}: {:?}", ticket.id, err);
                ViewState::Failed(err.to_string())
            }
        };
        Completion::Applied
    }

    /// Discard the document and invalidate any outstanding ticket.
    pub fn teardown(&mut self) {
        self.id = None;
        self.generation += 1;
        self.state = ViewState::Loading;
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && self.id.as_ref() == Some(&ticket.id)
    }

    fn restart(&mut self, id: PackageId) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        FetchTicket {
            generation: self.generation,
            id,
        }
    }
}

impl Default for PackageDetailView {
    fn default() -> Self {
        Self::new()
    }
}
