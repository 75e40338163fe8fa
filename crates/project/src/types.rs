//! Project classification types.

use serde::{Deserialize, Serialize};

/// Deployable kind of a project directory.
///
/// Closed sum — the deploy dispatch matches on it exhaustively, so adding
/// a kind forces a review of every branch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneType {
    Scene,
    PortableExperience,
    SmartItem,
    Workspace,
}

/// Result of classifying a project directory.
///
/// Produced once per deploy run and immutable for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectInfo {
    pub scene_type: SceneType,
}
