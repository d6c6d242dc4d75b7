use crate::source::errors::{SourceError, SourceResult};
use std::borrow::Cow;

/// Returns the directory portion of a `/`-separated entry path,
/// or `""` for a top-level entry.
pub(crate) fn parent(path: &str) -> &str {
    path.rfind('/').map_or("", |index| &path[..index])
}

pub(crate) fn decode(encoded: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(encoded).decode_utf8_lossy()
}

/// Drops a trailing `?query` or `#fragment` from an href.
///
/// Manifest hrefs may carry either; neither participates in entry lookup.
pub(crate) fn strip_fragment(href: &str) -> &str {
    href.find(['?', '#']).map_or(href, |position| &href[..position])
}

/// Resolve `relative` against the normalized directory `base`,
/// applying `.` and `..` segments and collapsing empty ones.
///
/// A leading `/` re-bases resolution at the archive root, matching the
/// convention used by hrefs within EPUB documents. Resolution is pure
/// string manipulation; no filesystem state is consulted.
///
/// # Errors
/// [`SourceError::InvalidPath`]: `relative` pops past the archive root,
/// or normalizes to nothing at all.
pub(crate) fn resolve(base: &str, relative: &str) -> SourceResult<String> {
    let decoded = decode(strip_fragment(relative));
    let (base, rest) = match decoded.strip_prefix('/') {
        // Archive-root-relative, never filesystem-root-relative
        Some(rest) => ("", rest),
        None => (base, decoded.as_ref()),
    };

    let mut stack: Vec<&str> = base
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if stack.pop().is_none() {
                    return Err(SourceError::InvalidPath {
                        path: relative.to_owned(),
                    });
                }
            }
            segment => stack.push(segment),
        }
    }

    if stack.is_empty() {
        return Err(SourceError::InvalidPath {
            path: relative.to_owned(),
        });
    }
    Ok(stack.join("/"))
}

#[cfg(test)]
mod tests {
    use crate::source::errors::SourceError;

    #[test]
    fn test_parent() {
        #[rustfmt::skip]
        let expected = [
            ("OEBPS/text", "OEBPS/text/chapter1.xhtml"),
            ("OEBPS", "OEBPS/content.opf"),
            ("", "content.opf"),
            ("", ""),
        ];

        for (expect, path) in expected {
            assert_eq!(expect, super::parent(path));
        }
    }

    #[test]
    fn test_resolve() {
        #[rustfmt::skip]
        let expected = [
            ("OEBPS/text/chapter1.xhtml", "OEBPS", "text/chapter1.xhtml"),
            ("OEBPS/text/chapter1.xhtml", "OEBPS", "./text//chapter1.xhtml"),
            ("OEBPS/toc.ncx", "OEBPS/text", "../toc.ncx"),
            ("cover.jpg", "OEBPS/text", "../../cover.jpg"),
            ("META-INF/container.xml", "OEBPS", "/META-INF/container.xml"),
            ("OEBPS/content.opf", "", "OEBPS/content.opf"),
            ("OEBPS/a file.xhtml", "OEBPS", "a%20file.xhtml"),
            ("OEBPS/chapter1.xhtml", "OEBPS", "chapter1.xhtml#part-2"),
            ("OEBPS/chapter1.xhtml", "OEBPS", "chapter1.xhtml?q=1"),
        ];

        for (expect, base, relative) in expected {
            assert_eq!(expect, super::resolve(base, relative).unwrap());
        }
    }

    #[test]
    fn test_resolve_escape() {
        for (base, relative) in [
            ("OEBPS", "../../chapter1.xhtml"),
            ("", "../content.opf"),
            ("OEBPS/text", "/../secrets"),
            ("OEBPS", ".."),
        ] {
            assert!(matches!(
                super::resolve(base, relative),
                Err(SourceError::InvalidPath { .. })
            ));
        }
    }

    #[test]
    fn test_resolve_empty() {
        assert!(matches!(
            super::resolve("", ""),
            Err(SourceError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_strip_fragment() {
        assert_eq!("a.xhtml", super::strip_fragment("a.xhtml#anchor"));
        assert_eq!("a.xhtml", super::strip_fragment("a.xhtml?query#anchor"));
        assert_eq!("a.xhtml", super::strip_fragment("a.xhtml"));
    }
}
