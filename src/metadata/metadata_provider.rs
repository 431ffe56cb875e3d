use std::{fs, path::Path, sync::Arc};

use indexmap::IndexMap;

use crate::metadata::{MetadataError, ResourceMetadata};

/// `force_eager` as found for one resource and operation, before the
/// system-wide default is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResourceEagerConfig {
    pub operation: Option<bool>,
    pub resource: Option<bool>,
}

impl ResourceEagerConfig {
    pub fn new(operation: Option<bool>, resource: Option<bool>) -> Self {
        Self { operation, resource }
    }

    /// Operation overrides resource, resource overrides `default`.
    pub fn resolve_force_eager(&self, default: bool) -> bool {
        self.operation.or(self.resource).unwrap_or(default)
    }
}

pub trait ResourceMetadataProvider {
    /// Unknown or absent operations resolve to the resource-level setting.
    fn resolve(&self, resource_type: &str, operation_name: Option<&str>) -> Result<ResourceEagerConfig, MetadataError>;
}

impl<T: ResourceMetadataProvider + ?Sized> ResourceMetadataProvider for &T {
    fn resolve(&self, resource_type: &str, operation_name: Option<&str>) -> Result<ResourceEagerConfig, MetadataError> {
        (**self).resolve(resource_type, operation_name)
    }
}

impl<T: ResourceMetadataProvider + ?Sized> ResourceMetadataProvider for Arc<T> {
    fn resolve(&self, resource_type: &str, operation_name: Option<&str>) -> Result<ResourceEagerConfig, MetadataError> {
        (**self).resolve(resource_type, operation_name)
    }
}

/// In-memory provider keyed by resource type.
#[derive(Debug, Default, Clone)]
pub struct ResourceMetadataRegistry {
    resources: IndexMap<String, ResourceMetadata>,
}

impl ResourceMetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, resource_type: &str, metadata: ResourceMetadata) -> &mut Self {
        self.resources.insert(resource_type.to_string(), metadata);
        self
    }

    pub fn get(&self, resource_type: &str) -> Option<&ResourceMetadata> {
        self.resources.get(resource_type)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// JSON object mapping resource types to their metadata.
    pub fn from_json_str(text: &str) -> Result<Self, MetadataError> {
        let resources: IndexMap<String, ResourceMetadata> = serde_json::from_str(text)?;
        Ok(Self { resources })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MetadataError::io(path, e))?;
        Self::from_json_str(&content)
    }
}

impl ResourceMetadataProvider for ResourceMetadataRegistry {
    fn resolve(&self, resource_type: &str, operation_name: Option<&str>) -> Result<ResourceEagerConfig, MetadataError> {
        let metadata = self.get(resource_type)
            .ok_or_else(|| MetadataError::ResourceClassNotFound(resource_type.to_string()))?;

        Ok(ResourceEagerConfig::new(
            metadata.operation_force_eager(operation_name),
            metadata.attributes.force_eager,
        ))
    }
}
