//! Portable-experience (smart wearable) publisher.
//!
//! Wearables are not tied to world coordinates: the pointer is the
//! wearable id from its manifest, and target resolution is entirely this
//! publisher's business — the orchestrator hands it files only. Repeated
//! deploys can reuse a session-cached signature when the caller opted in.

use std::path::Path;

use parceldeploy_content::EntityKind;
use parceldeploy_project::DeployableFile;
use parceldeploy_project::classifier::WEARABLE_FILE;
use serde::Deserialize;
use tracing::{debug, info};

use crate::entity::{build_entity_manifest, entity_id};
use crate::error::DeployError;
use crate::publisher::{IdentitySigner, PublishClient, SignatureCache};
use crate::types::{EntityDeployment, PublishReceipt};

#[derive(Debug, Deserialize)]
struct WearableManifest {
    id: String,
}

/// Publishes portable-experience projects.
pub struct WearablePublisher<'a> {
    client: &'a dyn PublishClient,
    signer: &'a dyn IdentitySigner,
}

impl<'a> WearablePublisher<'a> {
    /// Creates a publisher over the given client and signer.
    pub fn new(client: &'a dyn PublishClient, signer: &'a dyn IdentitySigner) -> Self {
        Self { client, signer }
    }

    /// Publishes the selected files as one wearable entity.
    ///
    /// With a cache supplied, a chain stored for this (server, project)
    /// pair is reused instead of invoking the signer again, and a freshly
    /// produced chain is stored for the rest of the session.
    pub async fn publish(
        &self,
        project_dir: &Path,
        files: Vec<DeployableFile>,
        mut cache: Option<&mut SignatureCache>,
    ) -> Result<PublishReceipt, DeployError> {
        let manifest_file = files
            .iter()
            .find(|f| f.path == WEARABLE_FILE)
            .ok_or(DeployError::MissingManifest(WEARABLE_FILE))?;

        let metadata: serde_json::Value = serde_json::from_slice(&manifest_file.content)?;
        let wearable: WearableManifest = serde_json::from_value(metadata.clone())?;

        let manifest =
            build_entity_manifest(EntityKind::Wearable, vec![wearable.id], metadata, &files);
        let entity_id = entity_id(&manifest)?;

        let target = self.client.server_address().to_string();
        let cached = cache
            .as_ref()
            .and_then(|c| c.get(&target, project_dir))
            .map(<[_]>::to_vec);

        let auth_chain = match cached {
            Some(chain) => {
                debug!(%target, dir = %project_dir.display(), "reusing session signature");
                chain
            }
            None => {
                let chain = self.signer.sign(&entity_id)?;
                if let Some(cache) = cache.as_mut() {
                    cache.store(&target, project_dir, chain.clone());
                }
                chain
            }
        };

        info!(
            %entity_id,
            server = %target,
            pointer = %manifest.pointers[0],
            files = files.len(),
            "publishing wearable"
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
