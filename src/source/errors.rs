//! Error-related types for a [`DataSource`](super::DataSource).

use std::io;
use std::path::PathBuf;

/// Alias for `Result<T, SourceError>`.
pub type SourceResult<T> = Result<T, SourceError>;

/// Possible errors when accessing the contents of an EPUB container.
///
/// Every failure mode of the read operations is a distinct variant so the
/// caller can decide which entries are mandatory; nothing is swallowed.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    /// The input path does not exist on the filesystem.
    #[error("[NotFound - {path:?}]: no such file or directory")]
    NotFound {
        /// The path responsible for triggering the error.
        path: PathBuf,
    },

    /// The root of a [`DirectorySource`](super::DirectorySource)
    /// exists but is not a directory.
    #[error("[NotADirectory - {path:?}]: source root is not a directory")]
    NotADirectory {
        /// The path responsible for triggering the error.
        path: PathBuf,
    },

    /// The input file is not a readable zip-format archive.
    ///
    /// Path *is* [`None`] when an in-memory reader is supplied through
    /// [`ArchiveSource::new`](super::ArchiveSource::new).
    #[error("[NotAnArchive - {path:?}]: {source}")]
    NotAnArchive {
        /// The root cause of this error.
        source: io::Error,
        /// The path responsible for triggering the error, if applicable.
        path: Option<PathBuf>,
    },

    /// An entry is compressed with a method other than
    /// `stored` or `deflate`, the only methods EPUB producers use.
    #[error("[UnsupportedCompression - `{entry}`]: method `{method}` is not supported")]
    UnsupportedCompression {
        /// The entry responsible for triggering the error.
        entry: String,
        /// The declared compression method.
        method: String,
    },

    /// Entry data disagrees with its declared size or checksum.
    ///
    /// Truncated or garbage bytes are never returned.
    #[error("[CorruptEntry - `{entry}`]: {source}")]
    CorruptEntry {
        /// The root cause of the error.
        source: io::Error,
        /// The entry responsible for triggering the error.
        entry: String,
    },

    /// A relative path escapes the archive root after normalization.
    ///
    /// Paths inside an EPUB are untrusted input; any `..` sequence that
    /// would climb above the root is rejected before I/O happens.
    #[error("[InvalidPath - `{path}`]: path escapes the archive root")]
    InvalidPath {
        /// The offending relative path, as given by the caller.
        path: String,
    },

    /// A well-formed path with no matching entry in the container.
    #[error("[MissingEntry - `{entry}`]: no such entry")]
    MissingEntry {
        /// The resolved entry path that has no match.
        entry: String,
    },

    /// A content file was requested before any successful
    /// [`package`](super::DataSource::package) read.
    ///
    /// Content paths are relative to the package document's directory,
    /// so they cannot be interpreted until that document has been read.
    #[error("[NotYetAvailable - `{entry}`]: content requested before the package document was read")]
    NotYetAvailable {
        /// The entry whose base directory is not yet established.
        entry: String,
    },

    /// The input path is neither an archive file nor a directory.
    #[error("[UnsupportedInput - {path:?}]: input is neither an archive file nor a directory")]
    UnsupportedInput {
        /// The path responsible for triggering the error.
        path: PathBuf,
    },

    /// Generic I/O failure while reading the container or an entry.
    #[error("[ReadError - {entry:?}]: {source}")]
    ReadError {
        /// The root cause of the error.
        source: io::Error,
        /// The entry being read when the error occurred, if applicable.
        entry: Option<String>,
    },
}
