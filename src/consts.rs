// Paths
pub(crate) const CONTAINER: &str = "META-INF/container.xml"; // The only fixed entry of an EPUB

// Container elements
pub(crate) const ROOT_FILE: &str = "rootfile";

// Container attributes
pub(crate) const FULL_PATH: &str = "full-path";
pub(crate) const MEDIA_TYPE: &str = "media-type";

// Package elements
pub(crate) const PACKAGE: &str = "package";
pub(crate) const MANIFEST: &str = "manifest";
pub(crate) const ITEM: &str = "item";
pub(crate) const DC_NAMESPACE: &str = "dc";

// Manifest attributes
pub(crate) const HREF: &str = "href";

// Dublin Core local names
pub(crate) const TITLE: &str = "title";
pub(crate) const CREATOR: &str = "creator";
pub(crate) const CONTRIBUTOR: &str = "contributor";
pub(crate) const PUBLISHER: &str = "publisher";
pub(crate) const IDENTIFIER: &str = "identifier";
pub(crate) const LANGUAGE: &str = "language";
pub(crate) const DATE: &str = "date";
pub(crate) const DESCRIPTION: &str = "description";
pub(crate) const SUBJECT: &str = "subject";
pub(crate) const RIGHTS: &str = "rights";

// Content-document elements excluded from text harvesting
pub(crate) const HEAD: &str = "head";
pub(crate) const SCRIPT: &str = "script";
pub(crate) const STYLE: &str = "style";

pub(crate) mod mime {
    pub(crate) const XHTML: &str = "application/xhtml+xml";
    pub(crate) const OEBPS_PACKAGE: &str = "application/oebps-package+xml";

    // constants where calling str.as_bytes() is not possible
    pub(crate) mod bytes {
        pub(crate) const OEBPS_PACKAGE: &[u8] = super::OEBPS_PACKAGE.as_bytes();
    }
}
