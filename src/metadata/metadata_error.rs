use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MetadataError {
    ResourceClassNotFound(String),
    Io { path: String, message: String },
    Json(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::ResourceClassNotFound(resource) => write!(f, "resource \"{}\" not found", resource),
            MetadataError::Io { path, message } => write!(f, "could not read {}: {}", path, message),
            MetadataError::Json(message) => write!(f, "invalid metadata JSON: {}", message),
        }
    }
}

impl std::error::Error for MetadataError {}

impl From<serde_json::Error> for MetadataError {
    fn from(value: serde_json::Error) -> Self {
        MetadataError::Json(value.to_string())
    }
}

impl MetadataError {
    pub(crate) fn io(path: &std::path::Path, error: std::io::Error) -> Self {
        MetadataError::Io { path: path.to_string_lossy().into_owned(), message: error.to_string() }
    }
}
