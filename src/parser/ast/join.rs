use crate::parser::{ast::{Column, Predicate, TextCollector}, ParseError, Phase, QueryParser};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
}

impl JoinType {
    pub fn parse(parser: &mut QueryParser) -> Result<JoinType, ParseError> {
        if parser.consume(|c| &c.inner_join) || parser.consume(|c| &c.join) {
            return Ok(JoinType::Inner);
        }

        if parser.consume(|c| &c.left_join) {
            return Ok(JoinType::Left);
        }

        ParseError::new("Invalid Join type", parser.position, parser).err()
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::Left => write!(f, "LEFT JOIN"),
        }
    }
}

/// Association join, `LEFT JOIN o.colors colors [WITH ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub join_type: JoinType,
    /// `<source alias>.<association>`
    pub association: Column,
    pub alias: String,
    pub condition: Option<Predicate>,
}

impl Join {
    pub fn left(source: &str, association: &str, alias: &str) -> Self {
        Self {
            join_type: JoinType::Left,
            association: Column::path(source, association),
            alias: alias.to_string(),
            condition: None,
        }
    }

    pub fn inner(source: &str, association: &str, alias: &str) -> Self {
        Self { join_type: JoinType::Inner, ..Self::left(source, association, alias) }
    }

    /// Alias the association is reached from.
    pub fn source_alias(&self) -> &str {
        self.association.alias()
    }

    pub fn parse_single(parser: &mut QueryParser) -> Result<Join, ParseError> {
        let join_type = JoinType::parse(parser)?;
        parser.next_non_whitespace();

        let pivot = parser.position;
        let association = Column::parse(parser)?;
        if !matches!(association, Column::Path { .. }) {
            return ParseError::new("Invalid join association", pivot, parser).err();
        }

        parser.next_non_whitespace();
        if parser.consume(|c| &c.alias) {
            parser.next_non_whitespace();
        }
        let pivot = parser.position;
        if parser.peek_phase().is_some() || parser.matches(|c| &c.with) {
            return ParseError::new("Missing alias for join", pivot, parser).err();
        }
        let alias = TextCollector::collect(parser)
            .map_err(|_| ParseError::new("Missing alias for join", pivot, parser))?;

        parser.next_non_whitespace();
        let condition = match parser.consume(|c| &c.with) {
            true => Some(Predicate::parse(parser)?),
            false => None,
        };

        Ok(Join { join_type, association, alias, condition })
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Vec<Join>, ParseError> {
        let mut joins: Vec<Join> = vec![];
        while parser.phase == Phase::Joins {
            joins.push(Self::parse_single(parser)?);

            if !parser.check_next_phase() {
                return ParseError::new("Invalid join statement", parser.position, parser).err();
            }
        }

        Ok(joins)
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.join_type, self.association, self.alias)?;
        if let Some(condition) = &self.condition {
            write!(f, " WITH {}", condition)?;
        }
        Ok(())
    }
}
