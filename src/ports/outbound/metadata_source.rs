use crate::shared::Result;
use async_trait::async_trait;

/// MetadataSource port for retrieving a repository's package index
///
/// This port abstracts where the `Packages` index comes from (local file,
/// HTTP mirror). Implementations hand back decoded text; compressed input is
/// decompressed before it reaches the caller.
///
/// # Async Support
/// Retrieval may involve network I/O, so the method is async.
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Human-readable location of the index, used in progress messages
    fn describe(&self) -> String;

    /// Fetches and decodes the full index text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or fails the security checks
    /// - The network request fails or returns a non-success status
    /// - The content is neither UTF-8 text nor valid gzip
    async fn fetch_metadata(&self) -> Result<String>;
}
