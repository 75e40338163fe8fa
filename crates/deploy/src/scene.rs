//! Scene publisher.
//!
//! Synthesizes the entity manifest from the selected file set, signs it,
//! and hands the whole deployment to the publish capability in one call.

use parceldeploy_content::{Coordinate, EntityKind};
use parceldeploy_project::DeployableFile;
use parceldeploy_project::classifier::SCENE_FILE;
use tracing::info;

use crate::entity::{build_entity_manifest, entity_id};
use crate::error::DeployError;
use crate::publisher::{IdentitySigner, PublishClient};
use crate::types::{DeployTarget, EntityDeployment, PublishReceipt, SceneManifest};

/// Publishes scene projects to an explicit or default target server.
pub struct ScenePublisher<'a> {
    client: &'a dyn PublishClient,
    signer: &'a dyn IdentitySigner,
}

impl<'a> ScenePublisher<'a> {
    /// Creates a publisher over the given client and signer.
    pub fn new(client: &'a dyn PublishClient, signer: &'a dyn IdentitySigner) -> Self {
        Self { client, signer }
    }

    /// Publishes the selected files as one scene entity.
    ///
    /// Pointers come from the parcels declared in the selected
    /// `scene.json`; each one is validated against the canonical
    /// coordinate form before it becomes a lookup key.
    pub async fn publish(
        &self,
        target: &DeployTarget,
        files: Vec<DeployableFile>,
    ) -> Result<PublishReceipt, DeployError> {
        let manifest_file = files
            .iter()
            .find(|f| f.path == SCENE_FILE)
            .ok_or(DeployError::MissingManifest(SCENE_FILE))?;

        let metadata: serde_json::Value = serde_json::from_slice(&manifest_file.content)?;
        let scene: SceneManifest = serde_json::from_value(metadata.clone())?;

        let pointers = scene
            .scene
            .parcels
            .iter()
            .map(|parcel| Ok(parcel.parse::<Coordinate>()?.to_string()))
            .collect::<Result<Vec<_>, DeployError>>()?;

        let manifest = build_entity_manifest(EntityKind::Scene, pointers, metadata, &files);
        let entity_id = entity_id(&manifest)?;
        let auth_chain = self.signer.sign(&entity_id)?;

        let server = target
            .address()
            .unwrap_or_else(|| self.client.server_address())
            .to_string();
        info!(
            %entity_id,
            %server,
            parcels = manifest.pointers.len(),
            files = files.len(),
            "publishing scene"
        );

        let deployment = EntityDeployment {
            entity_id,
            manifest,
            auth_chain,
            files,
        };
        self.client.publish_entity(&deployment).await
    }
}
