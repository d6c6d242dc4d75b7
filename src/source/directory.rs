use crate::consts;
use crate::source::errors::{SourceError, SourceResult};
use crate::source::{DataSource, path};
use std::fs;
use std::io;
use std::path::PathBuf;

/// [`DataSource`] backend over an unpacked EPUB directory tree.
///
/// Construction records the root path without touching the filesystem;
/// the unpacked-folder layout has nothing to validate eagerly, so every
/// failure surfaces on the first read instead.
#[derive(Debug)]
pub struct DirectorySource {
    root: PathBuf,
    package_dir: Option<String>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            package_dir: None,
        }
    }

    /// `entry` must be a normalized archive-root-relative name.
    fn read_entry(&self, entry: &str) -> SourceResult<Vec<u8>> {
        let root = self.root.canonicalize().map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound {
                    path: self.root.clone(),
                }
            } else {
                SourceError::ReadError {
                    source,
                    entry: None,
                }
            }
        })?;

        if !root.is_dir() {
            return Err(SourceError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let resolved = match root.join(entry).canonicalize() {
            Ok(resolved) => resolved,
            Err(source) => {
                return Err(match source.kind() {
                    // A missing file and a file standing in for a path
                    // component both mean the entry does not exist.
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                        SourceError::MissingEntry {
                            entry: entry.to_owned(),
                        }
                    }
                    _ => SourceError::ReadError {
                        source,
                        entry: Some(entry.to_owned()),
                    },
                });
            }
        };

        // Normalization already rejects `..` escapes; this guards
        // against symlinked entries pointing outside the root.
        if !resolved.starts_with(&root) || !resolved.is_file() {
            return Err(SourceError::InvalidPath {
                path: entry.to_owned(),
            });
        }

        fs::read(&resolved).map_err(|source| SourceError::ReadError {
            source,
            entry: Some(entry.to_owned()),
        })
    }
}

impl DataSource for DirectorySource {
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

#[cfg(test)]
mod tests {
    use super::DirectorySource;
    use crate::source::DataSource;
    use crate::source::errors::SourceError;
    use std::fs;

    fn example_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();

        fs::create_dir_all(dir.path().join("META-INF")).unwrap();
        fs::create_dir_all(dir.path().join("OEBPS/text")).unwrap();
        fs::write(dir.path().join("META-INF/container.xml"), b"<container/>").unwrap();
        fs::write(dir.path().join("OEBPS/content.opf"), b"<package/>").unwrap();
        fs::write(dir.path().join("OEBPS/text/chapter1.xhtml"), b"<html/>").unwrap();
        dir
    }

    #[test]
    fn test_read_sequence() {
        let dir = example_dir();
        let mut source = DirectorySource::new(dir.path());

        assert_eq!(b"<container/>", source.container().unwrap().as_slice());
        assert_eq!(
            b"<package/>",
            source.package("OEBPS/content.opf").unwrap().as_slice()
        );
        assert_eq!(
            b"<html/>",
            source
                .content_file("text/chapter1.xhtml")
                .unwrap()
                .as_slice()
        );
    }

    #[test]
    fn test_content_before_package() {
        let dir = example_dir();
        let mut source = DirectorySource::new(dir.path());

        assert!(matches!(
            source.content_file("text/chapter1.xhtml"),
            Err(SourceError::NotYetAvailable { .. })
        ));
    }

    #[test]
    fn test_missing_root() {
        let dir = example_dir();
        let mut source = DirectorySource::new(dir.path().join("no-such-dir"));

        assert!(matches!(
            source.container(),
            Err(SourceError::NotFound { .. })
        ));
    }

    #[test]
    fn test_root_is_a_file() {
        let dir = example_dir();
        let mut source = DirectorySource::new(dir.path().join("OEBPS/content.opf"));

        assert!(matches!(
            source.container(),
            Err(SourceError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_missing_entry() {
        let dir = example_dir();
        let mut source = DirectorySource::new(dir.path());

        assert!(matches!(
            source.package("OEBPS/no-such.opf"),
            Err(SourceError::MissingEntry { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escape() {
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("secret.txt"), b"secret").unwrap();

        let dir = example_dir();
        std::os::unix::fs::symlink(
            outside.path().join("secret.txt"),
            dir.path().join("OEBPS/escape.xhtml"),
        )
        .unwrap();

        let mut source = DirectorySource::new(dir.path());
        source.package("OEBPS/content.opf").unwrap();

        assert!(matches!(
            source.content_file("escape.xhtml"),
            Err(SourceError::InvalidPath { .. })
        ));
    }
}
