use crate::adapters::outbound::compression::decode_metadata;
use crate::ports::outbound::MetadataSource;
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound for a downloaded index, compressed or not
const MAX_DOWNLOAD_SIZE: u64 = 512 * 1024 * 1024;

/// Outcome of a failed download attempt
#[derive(Debug)]
enum DownloadError {
    /// Worth retrying
    Transient(String),
    /// Retrying cannot help (client errors, oversized index)
    Permanent(String),
}

/// Server-side and throttling statuses; other non-success codes are final
fn is_transient_status(status: reqwest::StatusCode) -> bool {
    status.is_server_error()
        || status == reqwest::StatusCode::REQUEST_TIMEOUT
        || status == reqwest::StatusCode::TOO_MANY_REQUESTS
}

/// HttpMetadataSource adapter downloading a `Packages` index from a mirror
///
/// The URL must point at the index file itself (`.../binary-amd64/Packages`
/// or `Packages.gz`). Transient failures are retried with a linear back-off.
pub struct HttpMetadataSource {
    client: reqwest::Client,
    url: String,
    max_retries: u32,
    show_progress: bool,
}

impl HttpMetadataSource {
    /// Creates a new HTTP source with default configuration
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("apt-depgraph/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            max_retries: 3,
            show_progress: true,
        })
    }

    /// Disables the download progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Downloads the index with retry logic
    ///
    /// Only transient failures (connection errors, timeouts, 5xx, 408, 429)
    /// are retried.
    async fn fetch_with_retry(&self) -> Result<Vec<u8>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.download().await {
                Ok(bytes) => return Ok(bytes),
                Err(DownloadError::Permanent(details)) => {
                    warn!(attempt, url = %self.url, error = %details, "download failed permanently");
                    last_error = Some(details);
                    break;
                }
                Err(DownloadError::Transient(details)) => {
                    warn!(attempt, url = %self.url, error = %details, "download failed");
                    last_error = Some(details);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(500 * attempt as u64)).await;
                    }
                }
            }
        }

        let details = last_error.unwrap_or_else(|| "no attempt was made".to_string());
        Err(DepGraphError::MetadataFetchError {
            url: self.url.clone(),
            details,
        }
        .into())
    }

    /// One download attempt, streaming the body chunk by chunk
    async fn download(&self) -> std::result::Result<Vec<u8>, DownloadError> {
        let mut response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DownloadError::Transient(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let details = format!("Server returned status code {}", status);
            return Err(if is_transient_status(status) {
                DownloadError::Transient(details)
            } else {
                DownloadError::Permanent(details)
            });
        }

        let expected = response.content_length();
        if let Some(length) = expected {
            if length > MAX_DOWNLOAD_SIZE {
                return Err(DownloadError::Permanent(format!(
                    "Index is too large ({} bytes). Maximum allowed size is {} bytes.",
                    length, MAX_DOWNLOAD_SIZE
                )));
            }
        }

        let progress = self.progress_bar(expected);
        let mut body = Vec::with_capacity(expected.unwrap_or(0) as usize);
        loop {
            let chunk = match response.chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(e) => {
                    progress.abandon();
                    return Err(DownloadError::Transient(e.to_string()));
                }
            };
            body.extend_from_slice(&chunk);
            if body.len() as u64 > MAX_DOWNLOAD_SIZE {
                progress.abandon();
                return Err(DownloadError::Permanent(format!(
                    "Index exceeds the maximum allowed size of {} bytes",
                    MAX_DOWNLOAD_SIZE
                )));
            }
            progress.set_position(body.len() as u64);
        }
        progress.finish_and_clear();

        debug!(url = %self.url, bytes = body.len(), "downloaded index");
        Ok(body)
    }

    fn progress_bar(&self, total: Option<u64>) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        match total {
            Some(total) => {
                let pb = ProgressBar::new(total);
                if let Ok(style) = ProgressStyle::default_bar()
                    .template("   {spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%)")
                {
                    pb.set_style(style.progress_chars("=>-"));
                }
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {bytes}") {
                    pb.set_style(style);
                }
                pb
            }
        }
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_metadata(&self) -> Result<String> {
        let bytes = self.fetch_with_retry().await?;
        decode_metadata(&bytes, &self.url)
    }
}
