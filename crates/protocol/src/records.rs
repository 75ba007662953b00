use serde::{Deserialize, Serialize};

/// A file handed over by the external bundle extractor.
///
/// Immutable once it enters the transfer subsystem, except for path
/// normalization just before transmission. `content` is an opaque byte
/// sequence; nothing in the pipeline re-encodes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub path: String,
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<String>,
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
}

/// A [`FileRecord`] annotated for transfer.
///
/// The partitioner emits one record per small file and one per chunk of an
/// oversized file. `chunk_group` is the 1-based ordinal of the oversized
/// source file among all oversized files in the input; it is unrelated to
/// the transmission batch index assigned later by the packer. Files at or
/// under the limit pass through with `is_chunked = false` and zeroed chunk
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub path: String,
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<String>,
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_chunked: bool,
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub chunk_id: u32,
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub chunk_group: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_last_chunk: bool,
    /// SHA-256 hex digest of `content` (empty disables verification).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub checksum: String,
}

fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}

fn is_false(v: &bool) -> bool {
    !v
}

/// Base64 serde module for binary content in JSON bodies.
mod base64_bytes {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        STANDARD.encode(data).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
