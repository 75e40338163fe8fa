//! Project classification by manifest inspection.
//!
//! A directory's deployable type is determined by which well-known
//! manifest files it contains. The workspace marker always wins, so a
//! workspace root never classifies as one of its member projects.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ProjectError;
use crate::types::{ProjectInfo, SceneType};

/// Marker file of a multi-project workspace root.
pub const WORKSPACE_FILE: &str = "workspace.json";
/// Marker file of a smart item project.
pub const SMART_ITEM_FILE: &str = "asset.json";
/// Marker file of a portable experience (smart wearable) project.
pub const WEARABLE_FILE: &str = "wearable.json";
/// Marker file of a scene project.
pub const SCENE_FILE: &str = "scene.json";

#[derive(Debug, Deserialize)]
struct WorkspaceManifest {
    folders: Vec<WorkspaceFolder>,
}

#[derive(Debug, Deserialize)]
struct WorkspaceFolder {
    path: String,
}

/// Determines the deployable type of a project directory.
///
/// Marker precedence: workspace > smart item > wearable > scene. A
/// directory with none of the markers is not a project.
pub fn classify(project_dir: &Path) -> Result<ProjectInfo, ProjectError> {
    let scene_type = if project_dir.join(WORKSPACE_FILE).is_file() {
        SceneType::Workspace
    } else if project_dir.join(SMART_ITEM_FILE).is_file() {
        SceneType::SmartItem
    } else if project_dir.join(WEARABLE_FILE).is_file() {
        SceneType::PortableExperience
    } else if project_dir.join(SCENE_FILE).is_file() {
        SceneType::Scene
    } else {
        return Err(ProjectError::NotAProject(project_dir.to_path_buf()));
    };

    debug!(dir = %project_dir.display(), ?scene_type, "classified project");
    Ok(ProjectInfo { scene_type })
}

/// Lists the member project directories of a workspace root.
///
/// Paths are resolved relative to the workspace directory.
pub fn workspace_projects(workspace_dir: &Path) -> Result<Vec<PathBuf>, ProjectError> {
    let text = std::fs::read_to_string(workspace_dir.join(WORKSPACE_FILE))?;
    let manifest: WorkspaceManifest = serde_json::from_str(&text)?;

    Ok(manifest
        .folders
        .into_iter()
        .map(|folder| workspace_dir.join(folder.path))
        .collect())
}
