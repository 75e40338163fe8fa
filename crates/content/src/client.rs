//! Content client trait.
//!
//! `ContentClient` is implemented by the host app to bridge queries
//! to the actual HTTP transport.

use std::future::Future;
use std::pin::Pin;

use crate::error::ContentError;
use crate::types::{EntityKind, RemoteEntity};

/// Abstract connection to a content server.
///
/// Using a trait keeps query logic decoupled from transport and testable
/// with mocks. A transport failure surfaces as `ContentError::Server`
/// carrying the upstream message; the service never retries.
pub trait ContentClient: Send + Sync {
    /// Fetches the entities currently published at the given pointers.
    ///
    /// Must support `EntityKind::Scene` with a single-element pointer list.
    /// An empty result is a valid response (nothing published there).
    fn fetch_entities_by_pointers(
        &self,
        kind: EntityKind,
        pointers: &[String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RemoteEntity>, ContentError>> + Send + '_>>;

    /// Returns the server address, for logging and error context.
    fn server_address(&self) -> &str;
}
