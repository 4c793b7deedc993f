//! Vault assets: voice, likeness and motion data a talent controls.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{RecordId, Timestamp};

/// Largest accepted upload (500 MiB).
pub const MAX_ASSET_BYTES: u64 = 500 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Voice,
    Likeness,
    Motion,
    Headshot,
}

/// Upload form for a new asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUpload {
    pub name: String,
    pub kind: AssetKind,
    pub size_bytes: u64,
    /// Protected assets are only shared through accepted access requests.
    #[serde(default = "default_protected")]
    pub protected: bool,
}

fn default_protected() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultAsset {
    pub id: RecordId,
    pub name: String,
    pub kind: AssetKind,
    pub size_bytes: u64,
    pub protected: bool,
    pub uploaded_at: Timestamp,
}

/// Validate an upload form.
pub fn validate_upload(upload: &AssetUpload) -> Result<(), CoreError> {
    if upload.name.trim().is_empty() {
        return Err(CoreError::Validation("Asset name must not be empty".into()));
    }
    if upload.size_bytes == 0 {
        return Err(CoreError::Validation("Asset must not be empty".into()));
    }
    if upload.size_bytes > MAX_ASSET_BYTES {
        return Err(CoreError::Validation(format!(
            "Asset is {} bytes, maximum is {MAX_ASSET_BYTES}",
            upload.size_bytes
        )));
    }
    Ok(())
}

impl VaultAsset {
    pub fn from_upload(upload: AssetUpload, uploaded_at: Timestamp) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: upload.name.trim().to_string(),
            kind: upload.kind,
            size_bytes: upload.size_bytes,
            protected: upload.protected,
            uploaded_at,
        }
    }
}
