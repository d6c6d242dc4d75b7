//! Pure extraction functions over entry bytes.
//!
//! Each function takes the raw bytes of one EPUB entry and returns the
//! values the host index cares about; no I/O happens here. The
//! [`Importer`](crate::importer::Importer) wires these functions to a
//! [`DataSource`](crate::source::DataSource) in the container's
//! mandated read order.

pub mod container;
pub mod content;
pub mod errors;
pub mod package;
mod xml;

use std::collections::BTreeMap;

/// String-keyed attribute mapping handed to the host indexing system.
///
/// Keys are the constants in [`keys`]; multi-valued fields such as
/// authors and subjects are joined into a single value.
pub type Attributes = BTreeMap<String, String>;

/// Attribute keys produced by extraction.
pub mod keys {
    /// Publication title(s).
    pub const TITLE: &str = "title";
    /// Primary creators, usually authors.
    pub const AUTHORS: &str = "authors";
    /// Secondary contributors (editors, illustrators).
    pub const CONTRIBUTORS: &str = "contributors";
    /// Publisher name(s).
    pub const PUBLISHERS: &str = "publishers";
    /// Publication identifier(s) such as ISBN or UUID.
    pub const IDENTIFIERS: &str = "identifiers";
    /// Language tag(s).
    pub const LANGUAGES: &str = "languages";
    /// Publication date.
    pub const DATE: &str = "date";
    /// Description or synopsis.
    pub const DESCRIPTION: &str = "description";
    /// Subject headings.
    pub const SUBJECTS: &str = "subjects";
    /// Rights statement.
    pub const RIGHTS: &str = "rights";
    /// Consolidated plain text of the publication's content documents.
    pub const TEXT_CONTENT: &str = "text_content";
}
