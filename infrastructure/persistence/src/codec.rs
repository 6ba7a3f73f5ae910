use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("codec.encode")]
    Encode(#[source] serde_json::Error),
    #[error("codec.malformed")]
    Malformed(#[source] serde_json::Error),
}

/// Encodes an entity to the textual wire representation used both for cache
/// storage and HTTP payloads.
pub fn encode<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(CodecError::Encode)
}

/// Decodes the textual representation back into an entity.
///
/// Empty or whitespace-only input yields `Ok(None)`: a key holding empty
/// text is "absent", not malformed. Anything else that fails to parse is a
/// `Malformed` error the caller must not swallow.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<Option<T>, CodecError> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(text).map(Some).map_err(CodecError::Malformed)
}
