use std::io::Read;

use flate2::read::GzDecoder;

use crate::error::ExtractError;

/// Decodes a gzip stream into utf-8 text.
pub fn decompress(compressed: &[u8]) -> Result<String, ExtractError> {
    let mut content = String::new();
    GzDecoder::new(compressed).read_to_string(&mut content)?;
    Ok(content)
}
