//! Data types for the deploy flow.

use std::path::PathBuf;

use parceldeploy_content::{ContentEntry, EntityKind};
use serde::{Deserialize, Serialize};

use crate::error::DeployError;

/// Entity manifest version published by this pipeline.
pub const ENTITY_VERSION: &str = "v3";

/// Options for one deploy run, as resolved by the CLI layer.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    pub working_dir: PathBuf,
    /// Full server address; exclusive with `target_content`.
    pub target: Option<String>,
    /// Content-only server address; exclusive with `target`.
    pub target_content: Option<String>,
    pub skip_build: bool,
    /// Reuse a session-cached signature for portable experiences.
    pub save_identity: bool,
}

/// Destination server for a scene deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployTarget {
    /// No explicit target; the injected client's default server.
    Default,
    /// Explicit full server address.
    Server(String),
    /// Explicit content-only server address.
    Content(String),
}

impl DeployTarget {
    /// Resolves the two CLI flags into a target.
    ///
    /// The flags are strictly exclusive — no precedence order exists, so
    /// supplying both is a hard error before any I/O happens.
    pub fn resolve(
        target: Option<&str>,
        target_content: Option<&str>,
    ) -> Result<Self, DeployError> {
        match (target, target_content) {
            (Some(_), Some(_)) => Err(DeployError::ConflictingTarget),
            (Some(t), None) => Ok(Self::Server(t.to_string())),
            (None, Some(tc)) => Ok(Self::Content(tc.to_string())),
            (None, None) => Ok(Self::Default),
        }
    }

    /// Explicit address, if one was supplied.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Server(addr) | Self::Content(addr) => Some(addr),
        }
    }
}

/// Typed view of the parcel block inside `scene.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneParcels {
    pub parcels: Vec<String>,
    pub base: String,
}

/// The scene manifest, as far as the publisher needs to read it.
///
/// Unknown fields are preserved through the raw metadata value, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneManifest {
    pub scene: SceneParcels,
    pub main: String,
}

/// One link of the signature chain produced by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthLink {
    pub payload: String,
    pub signature: String,
}

/// The entity manifest synthesized from the selected file set.
///
/// Always rebuilt from scratch per deployment; a stale `entity.json` on
/// disk is never uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityManifest {
    pub version: String,
    #[serde(rename = "type")]
    pub entity_type: EntityKind,
    pub pointers: Vec<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentEntry>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

/// Everything the publish capability needs for one atomic upload.
#[derive(Debug, Clone)]
pub struct EntityDeployment {
    /// Content id of the manifest.
    pub entity_id: String,
    pub manifest: EntityManifest,
    pub auth_chain: Vec<AuthLink>,
    pub files: Vec<parceldeploy_project::DeployableFile>,
}

/// Server-side acknowledgment of a publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub entity_id: String,
    /// Address the entity was published to.
    pub server: String,
}

/// Outcome of a successful deploy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReceipt {
    pub entity_id: String,
    pub scene_type: parceldeploy_project::SceneType,
    pub server: String,
    pub file_count: usize,
}
