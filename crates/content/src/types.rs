//! Data types for content-server queries.

use serde::{Deserialize, Serialize};

/// Kind of entity queried on the content server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Scene,
    Wearable,
}

impl EntityKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Scene => "scene",
            EntityKind::Wearable => "wearable",
        }
    }
}

/// One file entry inside a published entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub file: String,
    pub hash: String,
}

/// A published, content-addressed entity as returned by the server.
///
/// `content` may legitimately be empty — an entity with zero files is not
/// the same thing as no entity at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteEntity {
    pub id: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentEntry>,
}

/// Per-file projection of a parcel query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub cid: String,
}

/// Published status of a single parcel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelStatus {
    /// Content id of the entity occupying the parcel.
    pub cid: String,
    /// Files the entity publishes; empty for a contentless entity.
    pub files: Vec<FileInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_defaults_apply() {
        // Servers omit metadata/content for bare entities.
        let entity: RemoteEntity = serde_json::from_str(r#"{"id":"bafy1"}"#).unwrap();
        assert_eq!(entity.id, "bafy1");
        assert!(entity.metadata.is_null());
        assert!(entity.content.is_empty());
    }

    #[test]
    fn entity_json_roundtrip() {
        let entity = RemoteEntity {
            id: "bafy2".into(),
            metadata: serde_json::json!({"display": {"title": "plaza"}}),
            content: vec![ContentEntry {
                file: "game.js".into(),
                hash: "deadbeef".into(),
            }],
        };
        let json = serde_json::to_string(&entity).unwrap();
        let parsed: RemoteEntity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entity);
    }

    #[test]
    fn kind_wire_names() {
        assert_eq!(EntityKind::Scene.as_str(), "scene");
        assert_eq!(EntityKind::Wearable.as_str(), "wearable");
        assert_eq!(serde_json::to_string(&EntityKind::Scene).unwrap(), "\"scene\"");
    }
}
