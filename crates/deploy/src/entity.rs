//! Entity manifest synthesis.
//!
//! The manifest is derived from the selected file set: every file gets a
//! hex-encoded SHA-256 content id, and the manifest's own digest becomes
//! the entity id the identity collaborator signs.

use chrono::Utc;
use parceldeploy_content::{ContentEntry, EntityKind};
use parceldeploy_project::DeployableFile;
use sha2::{Digest, Sha256};

use crate::error::DeployError;
use crate::types::{ENTITY_VERSION, EntityManifest};

/// Computes the hex-encoded SHA-256 digest of `data`.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Builds a fresh entity manifest from the deployable file set.
pub fn build_entity_manifest(
    entity_type: EntityKind,
    pointers: Vec<String>,
    metadata: serde_json::Value,
    files: &[DeployableFile],
) -> EntityManifest {
    let content = files
        .iter()
        .map(|file| ContentEntry {
            file: file.path.clone(),
            hash: hash_bytes(&file.content),
        })
        .collect();

    EntityManifest {
        version: ENTITY_VERSION.into(),
        entity_type,
        pointers,
        timestamp: Utc::now().timestamp_millis(),
        content,
        metadata,
    }
}

/// Content id of a manifest: the digest of its serialized form.
pub fn entity_id(manifest: &EntityManifest) -> Result<String, DeployError> {
    let bytes = serde_json::to_vec(manifest)?;
    Ok(hash_bytes(&bytes))
}
