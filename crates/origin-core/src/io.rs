//! File plumbing - record loading, logo encoding, dataset writing
//!
//! The mechanical edges of the converter. All failures here are fatal;
//! nothing in this module inspects record content.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};
use crate::{ContactRecord, OriginDataSource};

/// Load an export file: a JSON array of contact records.
pub fn read_records(path: &Path) -> Result<Vec<ContactRecord>> {
    let data = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode a logo image as a `data:` URL for embedding in the descriptor.
///
/// The image bytes are opaque; only the file extension is consulted for
/// the media type, defaulting to JPEG.
pub fn logo_data_url(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let media_type = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        _ => "image/jpeg",
    };
    Ok(format!("data:{media_type};base64,{}", STANDARD.encode(bytes)))
}

/// Write the dataset as pretty-printed JSON with a trailing newline.
pub fn write_dataset(path: &Path, dataset: &OriginDataSource) -> Result<()> {
    let json = serde_json::to_string_pretty(dataset)?;
    fs::write(path, json + "\n").map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
