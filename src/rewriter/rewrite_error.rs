use std::fmt;

use crate::{metadata::MetadataError, parser::analyzer::AnalyzerError};

#[derive(Debug, Clone, PartialEq)]
pub enum RewriteError {
    /// Resource metadata could not be resolved.
    Configuration(MetadataError),
    /// The query references aliases it does not declare.
    InvalidQueryShape(AnalyzerError),
    TooManyJoins { joins: usize, max_joins: usize },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::Configuration(error) => write!(f, "resource metadata error: {}", error),
            RewriteError::InvalidQueryShape(error) => write!(f, "invalid query: {}", error),
            RewriteError::TooManyJoins { joins, max_joins } =>
                write!(f, "query has {} joins, at most {} are allowed", joins, max_joins),
        }
    }
}

impl std::error::Error for RewriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RewriteError::Configuration(error) => Some(error),
            RewriteError::InvalidQueryShape(error) => Some(error),
            RewriteError::TooManyJoins { .. } => None,
        }
    }
}

impl From<MetadataError> for RewriteError {
    fn from(value: MetadataError) -> Self {
        RewriteError::Configuration(value)
    }
}

impl From<AnalyzerError> for RewriteError {
    fn from(value: AnalyzerError) -> Self {
        RewriteError::InvalidQueryShape(value)
    }
}
