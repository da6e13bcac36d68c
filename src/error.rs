use thiserror::Error;

/// A route slug matched no service in the catalog.
///
/// Callers turn this into a not-found page; it never indicates a fault in
/// the catalog itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no service found for slug '{slug}'")]
pub struct RecordNotFound {
    pub slug: String,
}

impl RecordNotFound {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}
