use apt_depgraph::prelude::*;
use apt_depgraph::shared::error::DepGraphError;
use async_trait::async_trait;

/// Mock MetadataSource serving an in-memory repository index
pub struct MockMetadataSource {
    content: Option<String>,
}

impl MockMetadataSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// A source whose download always fails
    pub fn unreachable() -> Self {
        Self { content: None }
    }
}

#[async_trait]
impl MetadataSource for MockMetadataSource {
    fn describe(&self) -> String {
        "mock://Packages".to_string()
    }

    async fn fetch_metadata(&self) -> Result<String> {
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => Err(DepGraphError::MetadataFetchError {
                url: self.describe(),
                details: "connection refused".to_string(),
            }
            .into()),
        }
    }
}
