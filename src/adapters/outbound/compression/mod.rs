/// Decoding of raw repository index bytes
mod metadata_decoder;

pub use metadata_decoder::decode_metadata;
