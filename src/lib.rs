//! # epubmeta
//!
//! Uniform data access over zipped and unpacked EPUB containers, with
//! bibliographic metadata extraction for desktop search indexing.
//!
//! An EPUB has exactly one fixed, well-known location:
//! `META-INF/container.xml`. Everything else is discovered — the
//! container points at a package document, whose manifest lists every
//! content file. The [`source`] module hides whether those entries
//! live in a zip archive or an unpacked directory; the [`extract`]
//! module turns entry bytes into attribute values; [`Importer`] drives
//! the whole sequence for the host index.
//!
//! ## Examples
//! Importing the attributes of a publication:
//! ```no_run
//! use epubmeta::Importer;
//! use epubmeta::extract::keys;
//!
//! # fn main() -> epubmeta::errors::ImportResult<()> {
//! // Works identically for `book.epub` and an unzipped directory
//! let import = Importer::new().import("book.epub")?;
//!
//! println!("Title = {:?}", import.attributes.get(keys::TITLE));
//! println!("Authors = {:?}", import.attributes.get(keys::AUTHORS));
//! # Ok(())
//! # }
//! ```
//! Reading entries directly through a [`DataSource`]:
//! ```no_run
//! use epubmeta::source::{self, DataSource};
//!
//! # fn main() -> epubmeta::errors::SourceResult<()> {
//! let mut source = source::open("book.epub")?;
//!
//! let container = source.container()?;
//! let package = source.package("OEBPS/content.opf")?;
//! // Relative to `OEBPS/`, the package document's directory
//! let chapter = source.content_file("text/chapter1.xhtml")?;
//! # Ok(())
//! # }
//! ```

mod consts;
pub mod errors;
pub mod extract;
pub mod importer;
pub mod source;

pub use self::extract::Attributes;
pub use self::importer::{Import, Importer};
pub use self::source::{ArchiveSource, DataSource, DirectorySource};
