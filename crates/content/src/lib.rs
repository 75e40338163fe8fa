//! Content-server queries: coordinates, entities and parcel status.
//!
//! This crate implements the **read side** of the content-addressed server:
//! resolving a world coordinate to the entity currently published at that
//! parcel, and projecting it into status/metadata views. It is a library
//! crate with no transport dependencies — the host app provides a
//! `ContentClient` implementation that bridges to the actual HTTP client.
//!
//! # Operations
//!
//! - **Parcel status** — coordinate → published entity id + file list
//! - **Scene data** — coordinate → raw published scene manifest
//!
//! A coordinate with no published entity is a hard error, never an empty
//! success; an entity with zero content files is a successful empty list.

pub mod client;
pub mod coordinate;
pub mod error;
pub mod service;
pub mod types;

// Re-export primary types for convenience.
pub use client::ContentClient;
pub use coordinate::Coordinate;
pub use error::ContentError;
pub use service::ContentService;
pub use types::{ContentEntry, EntityKind, FileInfo, ParcelStatus, RemoteEntity};
