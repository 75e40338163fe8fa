//! Deploy pipeline: classify, build, select files, publish entity.
//!
//! This crate implements the **business logic** for publishing a local
//! project to a content-addressed server. It is a library crate with no
//! transport dependencies — the host app provides `PublishClient` and
//! `IdentitySigner` implementations that bridge to the actual HTTP client
//! and key management.
//!
//! # Pipeline
//!
//! 1. **Validate target** — `target` and `target-content` are exclusive
//! 2. **Resolve project** — classify; workspaces and smart items abort
//! 3. **Build** — production, non-watch (skippable)
//! 4. **Select files** — honoring `.deployignore` plus the structural
//!    `entity.json` exclusion
//! 5. **Dispatch** — scene or portable-experience publisher synthesizes,
//!    signs and uploads the entity
//!
//! Every abort before dispatch leaves the remote server untouched.

pub mod deploy;
pub mod entity;
pub mod error;
pub mod publisher;
pub mod scene;
pub mod types;
pub mod wearable;

// Re-export primary types for convenience.
pub use deploy::DeployOrchestrator;
pub use entity::{build_entity_manifest, entity_id, hash_bytes};
pub use error::DeployError;
pub use publisher::{IdentitySigner, PublishClient, SignatureCache};
pub use scene::ScenePublisher;
pub use types::{
    AuthLink, DeployOptions, DeployReceipt, DeployTarget, EntityDeployment, EntityManifest,
    PublishReceipt, SceneManifest,
};
pub use wearable::WearablePublisher;
