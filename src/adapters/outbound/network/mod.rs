/// Network adapters for downloading repository indexes
mod http_metadata_source;

pub use http_metadata_source::HttpMetadataSource;
