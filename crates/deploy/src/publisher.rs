//! Publish and identity traits, plus the session signature cache.
//!
//! `PublishClient` is implemented by the host app to bridge the publish
//! logic to the actual HTTP transport; `IdentitySigner` bridges to key
//! management. Using traits keeps the pipeline decoupled and testable
//! with mocks.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use crate::error::DeployError;
use crate::types::{AuthLink, EntityDeployment, PublishReceipt};

/// Abstract connection to the publish capability of a content server.
///
/// The upload is atomic from this side's observation: either the whole
/// entity publish succeeds or none of it becomes visible.
pub trait PublishClient: Send + Sync {
    /// Publishes an entity manifest together with its file contents.
    fn publish_entity(
        &self,
        deployment: &EntityDeployment,
    ) -> Pin<Box<dyn Future<Output = Result<PublishReceipt, DeployError>> + Send + '_>>;

    /// Returns the server address the client talks to.
    fn server_address(&self) -> &str;
}

/// Signs an entity id on behalf of the operator.
///
/// Key management and the signing scheme live outside this crate; a
/// signer may prompt the operator, which is why portable-experience
/// deploys can opt into caching the result for the session.
pub trait IdentitySigner: Send + Sync {
    fn sign(&self, entity_id: &str) -> Result<Vec<AuthLink>, DeployError>;
}

/// Session-scoped signature cache, keyed by (server target, project dir).
///
/// Owned and passed in by the caller — there is no ambient process-global
/// state. Populated only when the caller opted in via `save_identity`.
#[derive(Debug, Default)]
pub struct SignatureCache {
    entries: HashMap<(String, PathBuf), Vec<AuthLink>>,
}

impl SignatureCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached chain for a (target, project) pair.
    pub fn get(&self, target: &str, project_dir: &Path) -> Option<&[AuthLink]> {
        self.entries
            .get(&(target.to_string(), project_dir.to_path_buf()))
            .map(Vec::as_slice)
    }

    /// Stores a chain for a (target, project) pair.
    pub fn store(&mut self, target: &str, project_dir: &Path, chain: Vec<AuthLink>) {
        self.entries
            .insert((target.to_string(), project_dir.to_path_buf()), chain);
    }
}
