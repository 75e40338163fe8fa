//! Content query service — parcel status and scene data lookups.
//!
//! Resolves coordinates to published entities through a `ContentClient`.
//! Every call is a fresh remote fetch; the service holds no state beyond
//! the client reference.

use tracing::debug;

use crate::client::ContentClient;
use crate::coordinate::Coordinate;
use crate::error::ContentError;
use crate::types::{EntityKind, FileInfo, ParcelStatus, RemoteEntity};

/// Queries published content by parcel coordinate.
pub struct ContentService<'a> {
    client: &'a dyn ContentClient,
}

impl<'a> ContentService<'a> {
    /// Creates a service over the given client.
    pub fn new(client: &'a dyn ContentClient) -> Self {
        Self { client }
    }

    /// Returns the entity id and file list published at a parcel.
    ///
    /// An entity with no content yields an empty file list; a parcel with
    /// no entity at all is an error.
    pub async fn parcel_status(&self, coord: Coordinate) -> Result<ParcelStatus, ContentError> {
        let entity = self.fetch_entity(coord).await?;
        let files = entity
            .content
            .into_iter()
            .map(|entry| FileInfo {
                name: entry.file,
                cid: entry.hash,
            })
            .collect();

        Ok(ParcelStatus {
            cid: entity.id,
            files,
        })
    }

    /// Returns the raw scene manifest previously published at a parcel.
    pub async fn scene_data(&self, coord: Coordinate) -> Result<serde_json::Value, ContentError> {
        let entity = self.fetch_entity(coord).await?;
        Ok(entity.metadata)
    }

    /// Fetches the single entity whose pointer is the coordinate.
    ///
    /// A scene occupies several parcels but is queried one parcel at a
    /// time, so the pointer list is always a singleton and zero matches is
    /// a hard failure — callers must handle absence explicitly.
    async fn fetch_entity(&self, coord: Coordinate) -> Result<RemoteEntity, ContentError> {
        let pointer = coord.to_string();
        debug!(
            server = %self.client.server_address(),
            kind = EntityKind::Scene.as_str(),
            %pointer,
            "fetching entity"
        );

        let entities = self
            .client
            .fetch_entities_by_pointers(EntityKind::Scene, std::slice::from_ref(&pointer))
            .await?;

        entities.into_iter().next().ok_or_else(|| {
            ContentError::Server(format!("error retrieving parcel {pointer} information"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentEntry;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    /// Mock content client that records pointer queries.
    struct MockClient {
        responses: Mutex<Vec<Result<Vec<RemoteEntity>, ContentError>>>,
        queries: Mutex<Vec<(EntityKind, Vec<String>)>>,
    }

    impl MockClient {
        fn new(responses: Vec<Result<Vec<RemoteEntity>, ContentError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    impl ContentClient for MockClient {
        fn fetch_entities_by_pointers(
            &self,
            kind: EntityKind,
            pointers: &[String],
        ) -> Pin<Box<dyn Future<Output = Result<Vec<RemoteEntity>, ContentError>> + Send + '_>>
        {
            self.queries
                .lock()
                .unwrap()
                .push((kind, pointers.to_vec()));

            Box::pin(async move {
                let mut resps = self.responses.lock().unwrap();
                if resps.is_empty() {
                    Err(ContentError::Server("no mock response".into()))
                } else {
                    resps.remove(0)
                }
            })
        }

        fn server_address(&self) -> &str {
            "mock.content.server"
        }
    }

    fn entity(id: &str, content: Vec<ContentEntry>) -> RemoteEntity {
        RemoteEntity {
            id: id.into(),
            metadata: serde_json::json!({"main": "game.js"}),
            content,
        }
    }

    #[tokio::test]
    async fn parcel_status_maps_files() {
        let mock = MockClient::new(vec![Ok(vec![entity(
            "bafy1",
            vec![
                ContentEntry {
                    file: "game.js".into(),
                    hash: "h1".into(),
                },
                ContentEntry {
                    file: "scene.json".into(),
                    hash: "h2".into(),
                },
            ],
        )])]);

        let service = ContentService::new(&mock);
        let status = service
            .parcel_status(Coordinate::new(10, -20))
            .await
            .unwrap();

        assert_eq!(status.cid, "bafy1");
        assert_eq!(status.files.len(), 2);
        assert_eq!(status.files[0].name, "game.js");
        assert_eq!(status.files[0].cid, "h1");

        // Singleton pointer list, scene kind, canonical key.
        let queries = mock.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].0, EntityKind::Scene);
        assert_eq!(queries[0].1, vec!["10,-20".to_string()]);
    }

    #[tokio::test]
    async fn parcel_status_empty_content_is_ok() {
        let mock = MockClient::new(vec![Ok(vec![entity("bafy2", Vec::new())])]);
        let service = ContentService::new(&mock);

        let status = service.parcel_status(Coordinate::new(0, 0)).await.unwrap();
        assert_eq!(status.cid, "bafy2");
        assert!(status.files.is_empty());
    }

    #[tokio::test]
    async fn missing_entity_is_an_error_naming_the_parcel() {
        let mock = MockClient::new(vec![Ok(Vec::new())]);
        let service = ContentService::new(&mock);

        let err = service
            .parcel_status(Coordinate::new(42, 7))
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Server(_)));
        assert!(err.to_string().contains("42,7"));
    }

    #[tokio::test]
    async fn transport_failure_carries_upstream_message() {
        let mock = MockClient::new(vec![Err(ContentError::Server(
            "connection refused".into(),
        ))]);
        let service = ContentService::new(&mock);

        let err = service.scene_data(Coordinate::new(1, 1)).await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn scene_data_returns_metadata() {
        let mock = MockClient::new(vec![Ok(vec![entity("bafy3", Vec::new())])]);
        let service = ContentService::new(&mock);

        let data = service.scene_data(Coordinate::new(5, 5)).await.unwrap();
        assert_eq!(data["main"], "game.js");
    }
}
