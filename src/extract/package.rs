//! Extraction from the package document (`.opf`).

use crate::consts::{self, mime};
use crate::extract::errors::{FormatError, FormatResult};
use crate::extract::xml::{self, XmlElement};
use crate::extract::{Attributes, keys};
use quick_xml::events::{BytesStart, Event};
use std::collections::btree_map::Entry;
use std::str;

/// Contents of a parsed package document: the bibliographic attribute
/// mapping and the manifest listing every content file.
#[derive(Debug)]
pub struct Package {
    pub attributes: Attributes,
    pub manifest: Vec<ManifestItem>,
}

/// A single manifest `item` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestItem {
    /// Location of the resource, relative to the package document.
    pub href: String,
    /// Declared media type of the resource.
    pub media_type: String,
}

impl ManifestItem {
    /// Whether the item is an XHTML content document.
    pub fn is_document(&self) -> bool {
        self.media_type == mime::XHTML
    }
}

/// Parses a package document into its Dublin Core metadata and
/// manifest listing.
///
/// Repeated metadata entries (multiple authors, subjects) are joined
/// into one value per key; for `date` and `description` the first
/// entry wins, as later ones refine rather than extend it. Manifest
/// items lacking an `href` or `media-type` are skipped.
///
/// # Errors
/// - [`FormatError::NoPackageFound`]: No `package` element.
/// - [`FormatError::NoManifestFound`]: No `manifest` element.
/// - [`FormatError::Xml`]: Malformed XML.
pub fn parse(data: &[u8]) -> FormatResult<Package> {
    let mut reader = xml::reader(data);
    let mut saw_package = false;
    let mut saw_manifest = false;
    let mut fields = Vec::new();
    let mut manifest = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(el) if el.is_prefix(consts::DC_NAMESPACE) => {
                if let Some(key) = dc_key(&el) {
                    let value = xml::read_text(&mut reader, &el)?;

                    if !value.is_empty() {
                        fields.push((key, value));
                    }
                }
            }
            Event::Start(el) | Event::Empty(el) if el.is_local_name(consts::ITEM) => {
                if let (Some(href), Some(media_type)) = (
                    el.attribute_str(consts::HREF)?,
                    el.attribute_str(consts::MEDIA_TYPE)?,
                ) {
                    manifest.push(ManifestItem { href, media_type });
                }
            }
            Event::Start(el) if el.is_local_name(consts::PACKAGE) => saw_package = true,
            Event::Start(el) | Event::Empty(el) if el.is_local_name(consts::MANIFEST) => {
                saw_manifest = true;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_package {
        return Err(FormatError::NoPackageFound);
    }
    if !saw_manifest {
        return Err(FormatError::NoManifestFound);
    }

    Ok(Package {
        attributes: collect_attributes(fields),
        manifest,
    })
}

/// Maps a `dc:` element to the attribute key it populates.
fn dc_key(el: &BytesStart) -> Option<&'static str> {
    let local = el.local_name();
    let local = str::from_utf8(local.as_ref()).ok()?;

    Some(match local {
        consts::TITLE => keys::TITLE,
        consts::CREATOR => keys::AUTHORS,
        consts::CONTRIBUTOR => keys::CONTRIBUTORS,
        consts::PUBLISHER => keys::PUBLISHERS,
        consts::IDENTIFIER => keys::IDENTIFIERS,
        consts::LANGUAGE => keys::LANGUAGES,
        consts::DATE => keys::DATE,
        consts::DESCRIPTION => keys::DESCRIPTION,
        consts::SUBJECT => keys::SUBJECTS,
        consts::RIGHTS => keys::RIGHTS,
        _ => return None,
    })
}

fn collect_attributes(fields: Vec<(&'static str, String)>) -> Attributes {
    let mut attributes = Attributes::new();

    for (key, value) in fields {
        match attributes.entry(key.to_owned()) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(mut entry) => {
                // Refinements of single-valued fields are dropped
                if !matches!(key, keys::DATE | keys::DESCRIPTION) {
                    let joined = entry.get_mut();
                    joined.push_str("; ");
                    joined.push_str(&value);
                }
            }
        }
    }
    attributes
}
