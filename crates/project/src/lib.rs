//! Local project inspection for deployment.
//!
//! This crate implements everything the deploy pipeline needs to know
//! about a project directory before touching the network:
//!
//! - **Classify** — map manifest files to a project type
//! - **Ignore rules** — load or create the `.deployignore` rule set
//! - **Select** — compute the deployable file set honoring those rules
//! - **Build** — run the project's production build
//!
//! All state is recomputed from disk per invocation; nothing is cached
//! across runs.

pub mod build;
pub mod classifier;
pub mod error;
pub mod files;
pub mod ignore;
pub mod types;

// Re-export primary types for convenience.
pub use build::{BuildConfig, build, is_build_configured};
pub use classifier::{classify, workspace_projects};
pub use error::ProjectError;
pub use files::{DeployableFile, select_files};
pub use ignore::{ENTITY_FILE, IGNORE_FILE, IgnoreRuleSet};
pub use types::{ProjectInfo, SceneType};
