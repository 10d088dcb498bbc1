/// Filesystem adapters for file I/O operations
mod file_metadata_source;
mod file_writer;

pub use file_metadata_source::FileSystemMetadataSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
