//! The import facade: backend selection, the container's mandated
//! read order, and attribute assembly.

use crate::errors::{ImportError, ImportResult};
use crate::extract::{self, Attributes, keys};
use crate::source::{self, DataSource};
use log::{debug, warn};
use std::path::Path;

/// Cap on harvested text, so one oversized publication cannot
/// balloon the host's index.
const DEFAULT_MAX_TEXT_BYTES: usize = 2 * 1024 * 1024;

/// Imports the bibliographic attributes of a single EPUB publication.
///
/// One import performs a short bounded sequence of reads: the
/// container file, the package document it points to, then each
/// content document in the manifest. Container and package failures
/// abort the import; individual content files are optional and a
/// failing one is recorded in [`Import::skipped`] instead.
///
/// # Examples
/// ```no_run
/// # use epubmeta::errors::ImportResult;
/// use epubmeta::Importer;
/// use epubmeta::extract::keys;
///
/// # fn main() -> ImportResult<()> {
/// let import = Importer::new().import("example.epub")?;
///
/// if let Some(title) = import.attributes.get(keys::TITLE) {
///     println!("Title = {title}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Importer {
    text_content: bool,
    max_text_bytes: usize,
}

impl Importer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to read the manifest's content documents and populate
    /// [`keys::TEXT_CONTENT`]. Enabled by default; disabling it makes
    /// an import read only the container and package document.
    pub fn text_content(mut self, enabled: bool) -> Self {
        self.text_content = enabled;
        self
    }

    /// Byte cap for harvested text content.
    ///
    /// Once the cap is reached, remaining content documents are not read.
    pub fn max_text_bytes(mut self, limit: usize) -> Self {
        self.max_text_bytes = limit;
        self
    }

    /// Imports from the EPUB at `path`, which may be a zipped `.epub`
    /// file or a directory containing the contents of an unzipped EPUB.
    ///
    /// # Errors
    /// - [`ImportError::Source`]: The input is unreadable, or a
    ///   mandatory entry is missing or corrupt.
    /// - [`ImportError::Format`]: The container or package document
    ///   is malformed.
    pub fn import(&self, path: impl AsRef<Path>) -> ImportResult<Import> {
        let mut source = source::open(path.as_ref())?;
        self.import_source(source.as_mut())
    }

    /// Imports from an already constructed [`DataSource`].
    ///
    /// See [`Self::import`] for details.
    pub fn import_source(&self, source: &mut dyn DataSource) -> ImportResult<Import> {
        let container = source.container()?;
        let location = extract::container::package_location(&container)?;
        debug!("package document located at `{location}`");

        let package_data = source.package(&location)?;
        let package = extract::package::parse(&package_data)?;

        let mut attributes = package.attributes;
        let mut skipped = Vec::new();

        if self.text_content {
            let text = self.harvest_text(source, &package.manifest, &mut skipped);

            if !text.is_empty() {
                attributes.insert(keys::TEXT_CONTENT.to_owned(), text);
            }
        }

        debug!(
            "imported {} attribute(s), skipped {} content file(s)",
            attributes.len(),
            skipped.len()
        );
        Ok(Import {
            attributes,
            skipped,
        })
    }

    /// Reads every XHTML manifest entry, concatenating extracted text
    /// until the byte cap is reached.
    ///
    /// A failing entry is logged and recorded; the remaining entries
    /// are still read.
    fn harvest_text(
        &self,
        source: &mut dyn DataSource,
        manifest: &[extract::package::ManifestItem],
        skipped: &mut Vec<SkippedContent>,
    ) -> String {
        let mut text = String::new();

        for item in manifest.iter().filter(|item| item.is_document()) {
            if text.len() >= self.max_text_bytes {
                debug!("text cap reached; remaining content files not read");
                break;
            }

            let extracted = source
                .content_file(&item.href)
                .map_err(ImportError::from)
                .and_then(|data| Ok(extract::content::text(&data)?));

            match extracted {
                Ok(content) => {
                    if !content.is_empty() {
                        if !text.is_empty() {
                            text.push(' ');
                        }
                        text.push_str(&content);
                    }
                }
                Err(error) => {
                    warn!("skipping content file `{}`: {error}", item.href);
                    skipped.push(SkippedContent {
                        href: item.href.clone(),
                        error,
                    });
                }
            }
        }

        if text.len() > self.max_text_bytes {
            let mut end = self.max_text_bytes;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
        }
        text
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self {
            text_content: true,
            max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
        }
    }
}

/// Outcome of a successful import.
#[derive(Debug)]
pub struct Import {
    /// The attribute mapping handed to the host indexing system.
    pub attributes: Attributes,
    /// Content files that could not be read or parsed.
    ///
    /// The import as a whole still succeeds; the host decides whether
    /// any particular file was mandatory.
    pub skipped: Vec<SkippedContent>,
}

/// A content file that failed to contribute to the import.
#[derive(Debug)]
pub struct SkippedContent {
    /// The manifest href of the file, relative to the package document.
    pub href: String,
    /// Why the file was skipped.
    pub error: ImportError,
}
