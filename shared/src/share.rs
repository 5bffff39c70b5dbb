//! Share codes: an entry list packed into a URL-safe string.
//!
//! The payload is a JSON array of `[label, color]` pairs, base64 encoded
//! without padding. Ids are not shared; decoding assigns fresh ones.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use thiserror::Error;

use crate::entry::{validate_entries, Entry, EntryError};

/// Query parameter carrying a share code.
pub const SHARE_PARAM: &str = "w";

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("share code is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("share code payload is malformed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("shared entries are invalid: {0}")]
    Invalid(#[from] EntryError),

    #[error("share code contains no entries")]
    Empty,
}

pub fn encode_entries(entries: &[Entry]) -> Result<String, ShareError> {
    let pairs: Vec<(&str, &str)> = entries.iter().map(|e| (e.label(), e.color())).collect();
    let json = serde_json::to_vec(&pairs)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode_entries(code: &str) -> Result<Vec<Entry>, ShareError> {
    let bytes = URL_SAFE_NO_PAD.decode(code.trim())?;
    let pairs: Vec<(String, String)> = serde_json::from_slice(&bytes)?;
    if pairs.is_empty() {
        return Err(ShareError::Empty);
    }
    let entries: Vec<Entry> = pairs.into_iter().map(|(label, color)| Entry::new(label, color)).collect();
    validate_entries(&entries)?;
    Ok(entries)
}
