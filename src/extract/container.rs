//! Extraction from `META-INF/container.xml`.

use crate::consts::{self, mime};
use crate::extract::errors::{FormatError, FormatResult};
use crate::extract::xml::{self, XmlElement};
use quick_xml::events::Event;

/// Parses the container file and returns the package document location,
/// relative to the archive root.
///
/// Multiple `rootfile` locations may exist; only the first is accepted
/// as it is the default rendition.
///
/// # Errors
/// - [`FormatError::NoPackageReference`]: No `rootfile` element with
///   the package media type.
/// - [`FormatError::MissingAttribute`]: A matching `rootfile` lacks
///   the `full-path` attribute.
pub fn package_location(data: &[u8]) -> FormatResult<String> {
    let mut reader = xml::reader(data);

    loop {
        let el = match reader.read_event()? {
            Event::Start(el) | Event::Empty(el) if el.is_local_name(consts::ROOT_FILE) => el,
            Event::Eof => break,
            _ => continue,
        };

        if el.attribute(consts::MEDIA_TYPE).as_deref() != Some(mime::bytes::OEBPS_PACKAGE) {
            continue;
        }

        return el
            .attribute_str(consts::FULL_PATH)?
            .ok_or(FormatError::MissingAttribute(consts::FULL_PATH));
    }
    Err(FormatError::NoPackageReference)
}
