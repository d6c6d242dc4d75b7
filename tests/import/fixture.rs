//! Shared fixture: one minimal EPUB materialized as a temp directory,
//! a zipped temp file, or raw archive bytes.

use std::fs;
use std::io::{Cursor, Write};
use tempfile::{NamedTempFile, TempDir};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

pub const CONTAINER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
    <rootfiles>
        <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
    </rootfiles>
</container>
"#;

pub const OPF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf"
         xmlns:dc="http://purl.org/dc/elements/1.1/"
         unique-identifier="uid" version="3.0">
    <metadata>
        <dc:title>An Example Publication</dc:title>
        <dc:creator>Rob Author</dc:creator>
        <dc:creator>Ann Author</dc:creator>
        <dc:identifier id="uid">urn:uuid:aa11-bb22</dc:identifier>
        <dc:language>en</dc:language>
        <dc:date>2017-05-16</dc:date>
    </metadata>
    <manifest>
        <item id="c1" href="text/chapter1.xhtml" media-type="application/xhtml+xml"/>
        <item id="c2" href="text/chapter2.xhtml" media-type="application/xhtml+xml"/>
        <item id="css" href="css/style.css" media-type="text/css"/>
    </manifest>
    <spine>
        <itemref idref="c1"/>
        <itemref idref="c2"/>
    </spine>
</package>
"#;

pub const CHAPTER1: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml">
    <head><title>Chapter One</title></head>
    <body>
        <h1>Chapter One</h1>
        <p>It was a <em>dark</em> &amp; stormy night.</p>
    </body>
</html>
"#;

pub const STYLE: &str = "p { margin: 0; }\n";

/// Every entry of the fixture publication.
///
/// `text/chapter2.xhtml` is deliberately listed in the manifest but
/// absent here, so imports exercise the per-content-file skip path.
pub const ENTRIES: &[(&str, &[u8])] = &[
    ("META-INF/container.xml", CONTAINER.as_bytes()),
    ("OEBPS/content.opf", OPF.as_bytes()),
    ("OEBPS/text/chapter1.xhtml", CHAPTER1.as_bytes()),
    ("OEBPS/css/style.css", STYLE.as_bytes()),
];

/// Writes the fixture as an unpacked directory tree.
pub fn example_epub_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();

    for (name, data) in ENTRIES {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, data).unwrap();
    }
    dir
}

/// Writes the fixture as a zipped `.epub` temp file.
pub fn example_epub_file() -> NamedTempFile {
    epub_file_from(ENTRIES)
}

pub fn epub_file_from(entries: &[(&str, &[u8])]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&zip_deflated(entries)).unwrap();
    file.flush().unwrap();
    file
}

pub fn zip_deflated(entries: &[(&str, &[u8])]) -> Vec<u8> {
    zip_bytes(entries, CompressionMethod::Deflated)
}

pub fn zip_stored(entries: &[(&str, &[u8])]) -> Vec<u8> {
    zip_bytes(entries, CompressionMethod::Stored)
}

fn zip_bytes(entries: &[(&str, &[u8])], method: CompressionMethod) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(method);

    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Offset of the first occurrence of `needle` in `haystack`.
pub fn find(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
        .expect("pattern not present in archive bytes")
}
