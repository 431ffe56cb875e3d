use crate::parser::{ast::TextCollector, ParseError, QueryParser, WordComparer};
use std::fmt;

/// Reference to an identification variable (`o`, `counter`) or to a field or
/// association reached through one (`o.colors`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Column {
    Name { name: String },
    Path { alias: String, field: String },
}

impl Column {
    pub fn name(name: &str) -> Self {
        Column::Name { name: name.to_string() }
    }

    pub fn path(alias: &str, field: &str) -> Self {
        Column::Path { alias: alias.to_string(), field: field.to_string() }
    }

    /// The alias (or result variable) this column starts from.
    pub fn alias(&self) -> &str {
        match self {
            Column::Name { name } => name,
            Column::Path { alias, .. } => alias,
        }
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Column, ParseError> {
        let pivot = parser.position;

        if parser.current().is_ascii_digit() || !WordComparer::is_identifier_char(parser.current()) {
            return Err(ParseError::new("Invalid column", pivot, parser));
        }

        let first = TextCollector::collect(parser)?;
        if parser.current() != '.' {
            return Ok(Column::Name { name: first });
        }

        parser.next();
        let field = TextCollector::collect(parser)?;
        if parser.current() == '.' {
            return Err(ParseError::new("Invalid column", pivot, parser));
        }

        Ok(Column::Path { alias: first, field })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Name { name } => write!(f, "{}", name),
            Column::Path { alias, field } => write!(f, "{}.{}", alias, field),
        }
    }
}
