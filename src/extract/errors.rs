//! Error-related types for extraction.

use std::string::FromUtf8Error;

/// Alias for `Result<T, FormatError>`.
pub type FormatResult<T> = Result<T, FormatError>;

/// Possible format errors within the XML documents of an EPUB.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    /// A document unexpectedly causes an internal parser error.
    ///
    /// This may originate from malformed content, such as improper XML.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// The container does not contain a `rootfile` reference
    /// pointing to a package document.
    ///
    /// Error Source: `META-INF/container.xml`
    #[error("Missing `rootfile` element referencing a package document in `META-INF/container.xml`")]
    NoPackageReference,

    /// The `package` element is not found.
    ///
    /// Error Source: package document
    #[error("Missing `package` element")]
    NoPackageFound,

    /// The `manifest` element is not found.
    ///
    /// Error Source: package document
    #[error("Missing `manifest` element")]
    NoManifestFound,

    /// A required attribute is missing from an element.
    #[error("Required attribute missing: {0}")]
    MissingAttribute(&'static str),

    /// Attribute or text content is not valid UTF-8.
    #[error("Element content cannot be read as UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}
