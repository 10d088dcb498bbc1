use crate::adapters::outbound::compression::decode_metadata;
use crate::ports::outbound::MetadataSource;
use crate::shared::error::DepGraphError;
use crate::shared::security::{read_checked, MAX_METADATA_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// FileSystemMetadataSource adapter reading a local `Packages` index
///
/// Used in test mode. Plain and gzip-compressed files are both accepted.
pub struct FileSystemMetadataSource {
    path: PathBuf,
}

impl FileSystemMetadataSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the file with the shared security checks:
    /// - Reject symbolic links
    /// - Validate it is a regular file
    /// - Check the file size limit
    fn read_bytes(&self) -> Result<Vec<u8>> {
        if !self.path.exists() && self.path.symlink_metadata().is_err() {
            return Err(DepGraphError::MetadataNotFound {
                path: self.path.clone(),
            }
            .into());
        }

        read_checked(&self.path, "repository index", MAX_METADATA_FILE_SIZE)
    }
}

#[async_trait]
impl MetadataSource for FileSystemMetadataSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_metadata(&self) -> Result<String> {
        let bytes = self.read_bytes()?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read local index");
        decode_metadata(&bytes, &self.describe())
    }
}
