pub mod driver;
pub mod lifecycle;
pub mod source;

pub use driver::{ViewDriver, ViewSnapshot};
pub use lifecycle::{Completion, FetchTicket, PackageDetailView, ViewState};
pub use source::{PackageId, PackageSource};

/// Why a package fetch did not produce a document.
///
/// The `Display` form is the text shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    /// The status code is kept for diagnostics only; it is never displayed.
    #[error("Failed to fetch package details")]
    Status(u16),
    #[error("{0}")]
    Parse(String),
}

/// Result of one fetch: `Ok(None)` is an empty (null) document.
pub type FetchResult = Result<Option<roam_shared::PackageDocument>, FetchError>;
