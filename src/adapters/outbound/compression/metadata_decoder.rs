use crate::shared::error::DepGraphError;
use crate::shared::security::MAX_METADATA_FILE_SIZE;
use crate::shared::Result;
use flate2::read::GzDecoder;
use std::io::Read;

/// First two bytes of every gzip member
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Turns raw index bytes into text
///
/// Gzip input (`Packages.gz`) is detected by its magic bytes rather than the
/// file name, so mislabelled mirrors still work. Anything else must be UTF-8.
/// Decompressed output is capped at `MAX_METADATA_FILE_SIZE`.
///
/// # Arguments
/// * `bytes` - Raw content as read from disk or the network
/// * `source_name` - Location shown in error messages
pub fn decode_metadata(bytes: &[u8], source_name: &str) -> Result<String> {
    decode_with_limit(bytes, source_name, MAX_METADATA_FILE_SIZE)
}

fn decode_with_limit(bytes: &[u8], source_name: &str, max_size: u64) -> Result<String> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut decompressed = Vec::new();
        GzDecoder::new(bytes)
            .take(max_size + 1)
            .read_to_end(&mut decompressed)
            .map_err(|e| DepGraphError::MetadataDecodeError {
                source_name: source_name.to_string(),
                details: format!("invalid gzip stream: {}", e),
            })?;

        if decompressed.len() as u64 > max_size {
            return Err(DepGraphError::MetadataDecodeError {
                source_name: source_name.to_string(),
                details: format!(
                    "decompressed index exceeds the maximum allowed size of {} bytes",
                    max_size
                ),
            }
            .into());
        }
        return into_text(decompressed, source_name);
    }

    into_text(bytes.to_vec(), source_name)
}

fn into_text(bytes: Vec<u8>, source_name: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        DepGraphError::MetadataDecodeError {
            source_name: source_name.to_string(),
            details: format!("content is not valid UTF-8: {}", e),
        }
        .into()
    })
}
