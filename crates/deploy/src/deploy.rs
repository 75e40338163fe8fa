//! Deploy orchestrator.
//!
//! Drives a single deploy run: validate the target, resolve the project,
//! build, select files and dispatch to the type-specific publisher. Every
//! abort happens before the first remote call; cancellation is honored
//! between steps and not once dispatch has begun.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use parceldeploy_project::{
    BuildConfig, ENTITY_FILE, IgnoreRuleSet, ProjectError, SceneType, build, classify,
    is_build_configured, select_files, workspace_projects,
};

use crate::error::DeployError;
use crate::publisher::{IdentitySigner, PublishClient, SignatureCache};
use crate::scene::ScenePublisher;
use crate::types::{DeployOptions, DeployReceipt, DeployTarget};
use crate::wearable::WearablePublisher;

/// Orchestrates one deployment from project directory to content server.
pub struct DeployOrchestrator<'a> {
    client: &'a dyn PublishClient,
    signer: &'a dyn IdentitySigner,
    cancel: CancellationToken,
}

impl<'a> DeployOrchestrator<'a> {
    /// Creates a new orchestrator over the given client and signer.
    pub fn new(client: &'a dyn PublishClient, signer: &'a dyn IdentitySigner) -> Self {
        Self {
            client,
            signer,
            cancel: CancellationToken::new(),
        }
    }

    /// Returns a cancellation token for this deployment.
    ///
    /// Cancelling aborts the run between pipeline steps; once dispatch has
    /// started the publish call runs to completion or failure.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Runs the full deploy pipeline.
    ///
    /// The project type, ignore rules and file set are recomputed from
    /// disk on every call; only the signature cache, owned by the caller,
    /// carries state between runs.
    pub async fn deploy(
        &self,
        options: &DeployOptions,
        cache: Option<&mut SignatureCache>,
    ) -> Result<DeployReceipt, DeployError> {
        // 1. Validate target before any I/O.
        let target =
            DeployTarget::resolve(options.target.as_deref(), options.target_content.as_deref())?;
        self.check_cancelled()?;

        // 2. Resolve the project. A workspace holding exactly one project
        //    resolves into that member; anything else aborts here, before
        //    the build step can touch anything.
        let mut project_dir = options.working_dir.clone();
        let mut info = classify(&project_dir)?;
        if info.scene_type == SceneType::Workspace {
            let projects = workspace_projects(&project_dir)?;
            let [single] = projects.as_slice() else {
                warn!(
                    projects = projects.len(),
                    "refusing to deploy a multi-project workspace root"
                );
                return Err(DeployError::AmbiguousWorkspace);
            };
            debug!(member = %single.display(), "workspace resolves to a single project");
            project_dir = single.clone();
            info = classify(&project_dir)?;
        }
        match info.scene_type {
            SceneType::Workspace => return Err(DeployError::AmbiguousWorkspace),
            SceneType::SmartItem => return Err(DeployError::NotDeployable),
            SceneType::Scene | SceneType::PortableExperience => {}
        }
        let dir = project_dir.as_path();
        self.check_cancelled()?;

        // 3. Build in production mode, unless the caller skipped it.
        if !options.skip_build {
            if !is_build_configured(dir) {
                return Err(DeployError::MissingBuildConfig(dir.to_path_buf()));
            }
            let config = BuildConfig {
                working_dir: dir.to_path_buf(),
                watch: false,
                production: true,
                silence: true,
            };
            build(&config).await.map_err(build_error)?;
            info!(dir = %dir.display(), "production build succeeded");
        } else {
            debug!(dir = %dir.display(), "build skipped by caller");
        }
        self.check_cancelled()?;

        // 4. Select the deployable file set.
        let mut rules = IgnoreRuleSet::load_or_create(dir)?;
        rules.ensure(ENTITY_FILE);
        let files = select_files(dir, &rules)?;
        let file_count = files.len();
        self.check_cancelled()?;

        // 5. Dispatch by project type. Exhaustive on purpose: a new kind
        //    must pick a branch here before it can ship.
        let receipt = match info.scene_type {
            SceneType::Scene => {
                ScenePublisher::new(self.client, self.signer)
                    .publish(&target, files)
                    .await?
            }
            SceneType::PortableExperience => {
                let session = if options.save_identity { cache } else { None };
                WearablePublisher::new(self.client, self.signer)
                    .publish(dir, files, session)
                    .await?
            }
            SceneType::SmartItem => return Err(DeployError::NotDeployable),
            SceneType::Workspace => return Err(DeployError::AmbiguousWorkspace),
        };

        info!(
            entity_id = %receipt.entity_id,
            server = %receipt.server,
            files = file_count,
            "deployed"
        );

        Ok(DeployReceipt {
            entity_id: receipt.entity_id,
            scene_type: info.scene_type,
            server: receipt.server,
            file_count,
        })
    }

    fn check_cancelled(&self) -> Result<(), DeployError> {
        if self.cancel.is_cancelled() {
            Err(DeployError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Maps a build failure to the dedicated kind without re-wrapping its
/// message; other project errors pass through unchanged.
fn build_error(e: ProjectError) -> DeployError {
    match e {
        ProjectError::Build(msg) => DeployError::Build(msg),
        other => DeployError::Project(other),
    }
}
