//! Bundle reader for opening exported archives.

use crate::snapshot::DataSnapshot;
use crate::{BundleError, Result, BUNDLE_FOLDER, SNAPSHOT_NAME};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, info};
use zip::ZipArchive;

/// Reader for exported resume analysis bundles.
pub struct BundleReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl BundleReader<File> {
    /// Open a bundle from a file path.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl BundleReader<Cursor<Vec<u8>>> {
    /// Open a bundle from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> BundleReader<R> {
    /// Create a reader from any Read + Seek source.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        info!(entries = archive.len(), "Bundle opened");
        Ok(Self { archive })
    }

    /// Number of entries in the archive.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Whether the archive holds no entries.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// All entry names, in archive order.
    pub fn file_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// Check whether an entry exists.
    pub fn has_file(&self, path: &str) -> bool {
        self.archive.index_for_name(path).is_some()
    }

    /// Read one entry's bytes.
    pub fn read(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(path)
            .map_err(|_| BundleError::FileNotFound(path.to_string()))?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        debug!(path, bytes = data.len(), "Read bundle entry");
        Ok(data)
    }

    /// Read and parse the `data.json` snapshot.
    pub fn read_snapshot(&mut self) -> Result<DataSnapshot> {
        let path = format!("{BUNDLE_FOLDER}/{SNAPSHOT_NAME}");
        let bytes = self.read(&path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(BundleReader::from_bytes(b"not a zip archive".to_vec()).is_err());
        assert!(BundleReader::from_bytes(Vec::new()).is_err());
    }

    #[test]
    fn test_missing_entry_is_file_not_found() {
        // An empty but valid zip: header-less central directory end record.
        let empty_zip = {
            let cursor = Cursor::new(Vec::new());
            let writer = zip::ZipWriter::new(cursor);
            writer.finish().unwrap().into_inner()
        };

        let mut reader = BundleReader::from_bytes(empty_zip).unwrap();
        assert!(matches!(
            reader.read("missing.txt"),
            Err(BundleError::FileNotFound(_))
        ));
    }
}
