use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceAttributes {
    pub force_eager: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationMetadata {
    pub force_eager: Option<bool>,
}

/// What is known about an API resource: its attributes and the attributes of
/// each of its collection operations.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceMetadata {
    pub short_name: Option<String>,
    pub attributes: ResourceAttributes,
    pub collection_operations: IndexMap<String, OperationMetadata>,
}

impl ResourceMetadata {
    pub fn new(short_name: &str) -> Self {
        Self { short_name: Some(short_name.to_string()), ..Default::default() }
    }

    pub fn with_force_eager(mut self, force_eager: bool) -> Self {
        self.attributes.force_eager = Some(force_eager);
        self
    }

    pub fn with_collection_operation(mut self, name: &str, operation: OperationMetadata) -> Self {
        self.collection_operations.insert(name.to_string(), operation);
        self
    }

    /// `force_eager` set on the named collection operation, if any.
    pub fn operation_force_eager(&self, operation_name: Option<&str>) -> Option<bool> {
        operation_name
            .and_then(|name| self.collection_operations.get(name))
            .and_then(|operation| operation.force_eager)
    }
}

impl OperationMetadata {
    pub fn force_eager(force_eager: bool) -> Self {
        Self { force_eager: Some(force_eager) }
    }
}

#[cfg(test)]
mod tests {
    use crate::metadata::{OperationMetadata, ResourceMetadata};

    #[test]
    pub fn test_deserialize_metadata() {
        let text = r#"{
            "short_name": "DummyCar",
            "attributes": { "force_eager": true },
            "collection_operations": { "get": { "force_eager": false }, "post": {} }
        }"#;

        let metadata: ResourceMetadata = serde_json::from_str(text).expect("Failed to parse metadata");

        assert_eq!(metadata.short_name.as_deref(), Some("DummyCar"));
        assert_eq!(metadata.attributes.force_eager, Some(true));
        assert_eq!(metadata.operation_force_eager(Some("get")), Some(false));
        assert_eq!(metadata.operation_force_eager(Some("post")), None);
        assert_eq!(metadata.operation_force_eager(Some("put")), None);
        assert_eq!(metadata.operation_force_eager(None), None);
    }

    #[test]
    pub fn test_builder() {
        let metadata = ResourceMetadata::new("DummyCar")
            .with_force_eager(false)
            .with_collection_operation("get", OperationMetadata::force_eager(true));

        assert_eq!(metadata.attributes.force_eager, Some(false));
        assert_eq!(metadata.operation_force_eager(Some("get")), Some(true));
    }
}
