//! Uniform data access over the two physical layouts of an EPUB:
//! a zip archive or an unpacked directory tree.
//!
//! The only fixed, well-known location in an EPUB is
//! `META-INF/container.xml`; every other path is discovered by first
//! reading that file, then the package document it points to. The
//! [`DataSource`] trait encodes that ordering, and its two backends,
//! [`ArchiveSource`] and [`DirectorySource`], make both layouts
//! indistinguishable to callers.

mod archive;
mod directory;
pub mod errors;
pub(crate) mod path;

pub use archive::ArchiveSource;
pub use directory::DirectorySource;

use crate::source::errors::{SourceError, SourceResult};
use std::path::Path;

/// Read access to the contents of a single EPUB publication.
///
/// The three operations follow the container format's indirection and
/// must be called in order: [`container`](Self::container) first,
/// [`package`](Self::package) with the path discovered from the
/// container, then [`content_file`](Self::content_file) for entries
/// listed in the package manifest.
///
/// One instance is created per import, used for a short bounded
/// sequence of reads, then dropped; the underlying archive or
/// directory handle is released on drop.
pub trait DataSource {
    /// Reads the container file, located at `META-INF/container.xml`
    /// in every EPUB.
    ///
    /// # Errors
    /// - [`SourceError::MissingEntry`]: The container file is absent.
    /// - [`SourceError::ReadError`]: The entry exists but cannot be read.
    fn container(&mut self) -> SourceResult<Vec<u8>>;

    /// Reads the package document at `path`, relative to the archive
    /// root per the container-file convention.
    ///
    /// On success, the package document's directory is recorded as the
    /// base for subsequent [`content_file`](Self::content_file) calls.
    ///
    /// # Errors
    /// - [`SourceError::InvalidPath`]: `path` escapes the archive root.
    /// - [`SourceError::MissingEntry`]: No entry at the resolved path.
    /// - [`SourceError::ReadError`]: The entry exists but cannot be read.
    fn package(&mut self, path: &str) -> SourceResult<Vec<u8>>;

    /// Reads a content file at `path`, relative to the directory of the
    /// most recently read package document.
    ///
    /// A leading `/` in `path` resolves from the archive root instead.
    ///
    /// # Errors
    /// - [`SourceError::NotYetAvailable`]: No [`package`](Self::package)
    ///   call has succeeded yet, so the base directory is unknown.
    /// - [`SourceError::InvalidPath`]: `path` escapes the archive root.
    /// - [`SourceError::MissingEntry`]: No entry at the resolved path.
    /// - [`SourceError::ReadError`]: The entry exists but cannot be read.
    fn content_file(&mut self, path: &str) -> SourceResult<Vec<u8>>;
}

/// Opens the appropriate [`DataSource`] backend for `path`:
/// [`DirectorySource`] for a directory, [`ArchiveSource`] for a file.
///
/// # Errors
/// - [`SourceError::NotFound`]: `path` does not exist.
/// - [`SourceError::UnsupportedInput`]: `path` is neither a file
///   nor a directory.
/// - [`SourceError::NotAnArchive`]: The file is not a zip archive.
pub fn open(path: impl AsRef<Path>) -> SourceResult<Box<dyn DataSource>> {
    let path = path.as_ref();

    if path.is_dir() {
        Ok(Box::new(DirectorySource::new(path)))
    } else if path.is_file() {
        Ok(Box::new(ArchiveSource::open(path)?))
    } else if path.exists() {
        Err(SourceError::UnsupportedInput {
            path: path.to_path_buf(),
        })
    } else {
        Err(SourceError::NotFound {
            path: path.to_path_buf(),
        })
    }
}
