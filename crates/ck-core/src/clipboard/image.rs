use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::SnapshotError;

/// Prefix of every image snapshot content.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encode PNG bytes as a self-contained `data:` URL.
pub fn encode_png_data_url(png: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(png))
}

/// Decode a `data:image/png;base64,` URL back into PNG bytes.
pub fn decode_png_data_url(data_url: &str) -> Result<Vec<u8>, SnapshotError> {
    let payload = data_url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or(SnapshotError::NotPngDataUrl)?;

    STANDARD
        .decode(payload)
        .map_err(|e| SnapshotError::InvalidImageEncoding(e.to_string()))
}
