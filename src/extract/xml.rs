use crate::extract::errors::{FormatError, FormatResult};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;

pub(crate) type ByteReader<'a> = Reader<&'a [u8]>;

pub(crate) fn reader(data: &[u8]) -> ByteReader<'_> {
    Reader::from_reader(data)
}

pub(crate) trait XmlElement {
    fn is_local_name(&self, local_name: &str) -> bool;

    fn is_prefix(&self, prefix: &str) -> bool;

    fn attribute(&self, key: &str) -> Option<Cow<'_, [u8]>>;

    /// Attribute value as an owned string.
    fn attribute_str(&self, key: &str) -> FormatResult<Option<String>>;
}

impl XmlElement for BytesStart<'_> {
    fn is_local_name(&self, local_name: &str) -> bool {
        self.local_name().as_ref() == local_name.as_bytes()
    }

    fn is_prefix(&self, prefix: &str) -> bool {
        self.name()
            .prefix()
            .is_some_and(|p| p.as_ref() == prefix.as_bytes())
    }

    fn attribute(&self, key: &str) -> Option<Cow<'_, [u8]>> {
        match self.try_get_attribute(key) {
            Ok(option) => option.map(|attribute| attribute.value),
            Err(_) => None,
        }
    }

    fn attribute_str(&self, key: &str) -> FormatResult<Option<String>> {
        self.attribute(key)
            .map(|value| String::from_utf8(value.into_owned()))
            .transpose()
            .map_err(FormatError::from)
    }
}

/// Collects the text content of `start` up to its matching end tag,
/// consolidating interior whitespace.
pub(crate) fn read_text<'a>(
    reader: &mut ByteReader<'a>,
    start: &BytesStart<'a>,
) -> FormatResult<String> {
    let mut value = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .unwrap_or_else(|_| String::from_utf8_lossy(text.as_ref()));
                append_words(&mut value, &text);
            }
            Event::CData(cdata) => {
                let text = cdata
                    .decode()
                    .unwrap_or_else(|_| String::from_utf8_lossy(cdata.as_ref()));
                append_words(&mut value, &text);
            }
            Event::End(el) if el.name() == start.name() => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(value)
}

/// Appends `text` word by word, separated by single spaces.
pub(crate) fn append_words(value: &mut String, text: &str) {
    for word in text.split_whitespace() {
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(word);
    }
}
