//! Document source backed by a fixture directory

use crate::error::HarnessError;
use byline_domain::traits::DocumentSource;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Component, Path, PathBuf};

/// Resolves document identifiers to files under a fixture root
///
/// Identifiers are relative paths. Absolute paths and `..` components are
/// refused so a corpus cannot reach outside the fixture directory. The
/// returned reader closes the file when dropped.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Fixture root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an identifier resolves to
    pub fn resolve(&self, identifier: &str) -> Result<PathBuf, HarnessError> {
        let relative = Path::new(identifier);
        let escapes = identifier.is_empty()
            || relative.components().any(|c| {
                matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
            });

        if escapes {
            return Err(HarnessError::Io {
                identifier: identifier.to_string(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "identifier must be a relative path inside the fixture root",
                ),
            });
        }

        Ok(self.root.join(relative))
    }
}

impl DocumentSource for FixtureSource {
    type Reader = BufReader<File>;
    type Error = HarnessError;

    fn open(&self, identifier: &str) -> Result<Self::Reader, Self::Error> {
        let path = self.resolve(identifier)?;
        let file = File::open(&path).map_err(|source| HarnessError::Io {
            identifier: identifier.to_string(),
            source,
        })?;
        Ok(BufReader::new(file))
    }
}
