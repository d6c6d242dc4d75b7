//! Error-related types for an import.

pub use crate::extract::errors::{FormatError, FormatResult};
pub use crate::source::errors::{SourceError, SourceResult};

/// Alias for `Result<T, ImportError>`.
pub type ImportResult<T> = Result<T, ImportError>;

/// Unified error type.
/// Possible errors for an [`Importer`](crate::Importer) run.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    /// File access within the EPUB container has failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Malformed content within the container or package documents.
    #[error(transparent)]
    Format(#[from] FormatError),
}
