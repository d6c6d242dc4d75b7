//! Plain-text extraction from XHTML content documents.

use crate::consts;
use crate::extract::errors::FormatResult;
use crate::extract::xml;
use quick_xml::events::{BytesStart, Event};

/// Extracts the human-readable text of an XHTML content document,
/// with markup stripped and whitespace consolidated to single spaces.
///
/// Non-prose elements (`head`, `script`, `style`) are skipped entirely.
///
/// # Errors
/// - [`FormatError::Xml`](crate::extract::errors::FormatError::Xml):
///   Malformed XML.
pub fn text(data: &[u8]) -> FormatResult<String> {
    let mut reader = xml::reader(data);
    let mut value = String::new();
    let mut skip_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(el) if is_skipped(&el) => skip_depth += 1,
            Event::End(el) if is_skipped_name(el.name().local_name().as_ref()) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(text) if skip_depth == 0 => {
                let text = text
                    .unescape()
                    .unwrap_or_else(|_| String::from_utf8_lossy(text.as_ref()));
                xml::append_words(&mut value, &text);
            }
            Event::CData(cdata) if skip_depth == 0 => {
                let text = cdata
                    .decode()
                    .unwrap_or_else(|_| String::from_utf8_lossy(cdata.as_ref()));
                xml::append_words(&mut value, &text);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(value)
}

fn is_skipped(el: &BytesStart) -> bool {
    is_skipped_name(el.local_name().as_ref())
}

fn is_skipped_name(local_name: &[u8]) -> bool {
    [consts::HEAD, consts::SCRIPT, consts::STYLE]
        .iter()
        .any(|name| name.as_bytes() == local_name)
}

#[cfg(test)]
mod tests {
    const XHTML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <html xmlns="http://www.w3.org/1999/xhtml">
            <head>
                <title>Chapter One</title>
                <style>p { margin: 0; }</style>
            </head>
            <body>
                <h1>Chapter   One</h1>
                <p>It was a <em>dark</em> &amp; stormy night.</p>
                <script>var hidden = true;</script>
                <p>The rain fell
                   in torrents.</p>
            </body>
        </html>"#;

    #[test]
    fn test_text() {
        let text = super::text(XHTML.as_bytes()).unwrap();

        assert_eq!(
            "Chapter One It was a dark & stormy night. The rain fell in torrents.",
            text
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!("", super::text(b"<html><body/></html>").unwrap());
    }
}
