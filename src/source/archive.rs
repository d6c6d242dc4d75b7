use crate::consts;
use crate::source::errors::{SourceError, SourceResult};
use crate::source::{DataSource, path};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipArchive as Zip;
use zip::result::ZipError;

/// [`DataSource`] backend over a zip-format archive.
///
/// Entries are looked up by exact, case-sensitive `/`-separated name
/// against the archive's central directory. Only the `stored` and
/// `deflate` compression methods are accepted, and entry data is
/// validated against the declared uncompressed size before it is
/// handed to the caller.
pub struct ArchiveSource<R> {
    archive: Zip<R>,
    package_dir: Option<String>,
}

impl ArchiveSource<BufReader<File>> {
    /// Opens the file at `path` as a zip archive.
    ///
    /// # Errors
    /// - [`SourceError::NotFound`]: `path` does not exist.
    /// - [`SourceError::NotAnArchive`]: The file is not a valid archive.
    /// - [`SourceError::ReadError`]: The file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SourceError::ReadError {
                source,
                entry: None,
            },
        })?;

        Self::from_reader(BufReader::new(file), Some(path))
    }
}

impl<R: Read + Seek> ArchiveSource<R> {
    /// Opens an archive from an in-memory or otherwise seekable reader.
    ///
    /// # Errors
    /// - [`SourceError::NotAnArchive`]: The data is not a valid archive.
    pub fn new(reader: R) -> SourceResult<Self> {
        Self::from_reader(reader, None)
    }

    fn from_reader(reader: R, archive_path: Option<&Path>) -> SourceResult<Self> {
        Zip::new(reader)
            .map(|archive| Self {
                archive,
                package_dir: None,
            })
            .map_err(|error| SourceError::NotAnArchive {
                source: io::Error::from(error),
                path: archive_path.map(Path::to_path_buf),
            })
    }

    /// `entry` must be a normalized archive-root-relative name.
    fn read_entry(&mut self, entry: &str) -> SourceResult<Vec<u8>> {
        let mut file = match self.archive.by_name(entry) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => {
                return Err(SourceError::MissingEntry {
                    entry: entry.to_owned(),
                });
            }
            Err(error) => {
                return Err(SourceError::ReadError {
                    source: io::Error::from(error),
                    entry: Some(entry.to_owned()),
                });
            }
        };

        match file.compression() {
            CompressionMethod::Stored | CompressionMethod::Deflated => {}
            method => {
                return Err(SourceError::UnsupportedCompression {
                    entry: entry.to_owned(),
                    method: format!("{method:?}"),
                });
            }
        }

        let declared = file.size();
        let mut buf = Vec::new();

        match file.read_to_end(&mut buf) {
            Ok(_) if buf.len() as u64 == declared => Ok(buf),
            Ok(read) => Err(SourceError::CorruptEntry {
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("decompressed size {read} does not match declared size {declared}"),
                ),
                entry: entry.to_owned(),
            }),
            // Decompression and checksum failures surface as read errors
            // on an entry the central directory vouched for.
            Err(source) => Err(SourceError::CorruptEntry {
                source,
                entry: entry.to_owned(),
            }),
        }
    }
}

impl<R: Read + Seek> DataSource for ArchiveSource<R> {
    fn container(&mut self) -> SourceResult<Vec<u8>> {
        self.read_entry(consts::CONTAINER)
    }

    fn package(&mut self, path: &str) -> SourceResult<Vec<u8>> {
        let resolved = path::resolve("", path)?;
        let bytes = self.read_entry(&resolved)?;

        self.package_dir = Some(path::parent(&resolved).to_owned());
        Ok(bytes)
    }

    fn content_file(&mut self, path: &str) -> SourceResult<Vec<u8>> {
        let base = self
            .package_dir
            .as_deref()
            .ok_or_else(|| SourceError::NotYetAvailable {
                entry: path.to_owned(),
            })?;
        let resolved = path::resolve(base, path)?;

        self.read_entry(&resolved)
    }
}
