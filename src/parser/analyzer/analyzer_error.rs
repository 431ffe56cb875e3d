use std::fmt;

use crate::parser::analyzer::Clause;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    MissingRoot,
    DuplicateAlias(String),
    UnknownAlias { alias: String, clause: Clause },
    UnknownJoinSource { join: String, source: String },
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerError::MissingRoot => write!(f, "query has no FROM clause"),
            AnalyzerError::DuplicateAlias(alias) => write!(f, "alias '{}' is declared more than once", alias),
            AnalyzerError::UnknownAlias { alias, clause } => write!(f, "unknown alias '{}' in {}", alias, clause),
            AnalyzerError::UnknownJoinSource { join, source } =>
                write!(f, "join '{}' starts from undeclared alias '{}'", join, source),
        }
    }
}

impl std::error::Error for AnalyzerError {}
