//! Deploy error types.

use std::path::PathBuf;

use parceldeploy_content::ContentError;
use parceldeploy_project::ProjectError;

/// Errors produced during deployment.
///
/// All are terminal for the current run; nothing is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("cannot set both the 'target' and 'target-content' arguments")]
    ConflictingTarget,

    #[error("project in {0} is not configured for compilation (no build manifest)")]
    MissingBuildConfig(PathBuf),

    #[error("cannot deploy a workspace; run the deployment from a project directory")]
    AmbiguousWorkspace,

    #[error("cannot deploy a smart item")]
    NotDeployable,

    #[error("build failed: {0}")]
    Build(String),

    #[error("required manifest {0} is missing from the deployable set")]
    MissingManifest(&'static str),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("publish failed: {0}")]
    Publish(String),

    #[error("cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
