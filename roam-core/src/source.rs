use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::FetchResult;

/// Opaque package identifier, passed through to the itinerary service untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PackageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Fetch collaborator: resolves a package document by identifier.
#[async_trait]
pub trait PackageSource: Send + Sync {
    /// Request the package once. No retries; timeouts are up to the implementation.
    async fn fetch_package(&self, id: &PackageId) -> FetchResult;
}
