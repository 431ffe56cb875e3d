// SELECT o, count(o.id) AS counter, CASE WHEN o.dateCreated IS NULL THEN 0 ELSE 1 END AS HIDDEN rank
// FROM App\Entity\Car o
// LEFT JOIN o.colors colors
// WHERE colors.name = :name AND o.id IN(SELECT o_2 FROM ...)
// GROUP BY o.colors
// HAVING counter > 3
// ORDER BY rank DESC

use indexmap::IndexMap;

use crate::parser::{ast::{Column, FromClause, FromParser, GroupBy, HavingParser, Join, Literal, OrderBy, Predicate, ProjectionParser, SelectItem, WhereParser}, ParseError, Phase, QueryParser};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryTree {
    pub projection: Vec<SelectItem>,
    pub from: Vec<FromClause>,
    pub joins: Vec<Join>,
    /// WHERE
    pub criteria: Option<Predicate>,
    pub group_by: Vec<Column>,
    pub having: Option<Predicate>,
    pub order_by: Vec<OrderBy>,
    pub parameters: IndexMap<String, Literal>,
}

impl QueryTree {
    pub fn root(&self) -> Option<&FromClause> {
        self.from.first()
    }

    pub fn root_alias(&self) -> Option<&str> {
        self.root().map(|root| root.alias.as_str())
    }

    /// Every alias declared by FROM and JOIN, in declaration order.
    pub fn declared_aliases(&self) -> impl Iterator<Item = &str> {
        self.from.iter().map(|f| f.alias.as_str())
            .chain(self.joins.iter().map(|j| j.alias.as_str()))
    }

    pub fn set_parameter(&mut self, name: &str, value: impl Into<Literal>) -> &mut Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Self, ParseError> {
        parser.next_non_whitespace();

        let query = Self::parse_statement(parser)?;

        if !parser.eof() {
            return ParseError::new("Unexpected text after query", parser.position, parser).err();
        }

        Ok(query)
    }

    /// Subquery inside parentheses; the cursor is left on the closing `)`.
    pub fn parse_nested(parser: &mut QueryParser) -> Result<Self, ParseError> {
        let outer_phase = parser.phase;
        parser.phase = Phase::Projection;
        parser.nesting += 1;

        let query = Self::parse_statement(parser);

        parser.nesting -= 1;
        parser.phase = outer_phase;
        query
    }

    fn parse_statement(parser: &mut QueryParser) -> Result<Self, ParseError> {
        let pivot = parser.position;
        let mut query = QueryTree {
            projection: ProjectionParser::parse(parser)?,
            ..Default::default()
        };

        while parser.phase != Phase::EOF {
            match parser.phase {
                Phase::Projection => return ParseError::new("Invalid query", parser.position, parser).err(),
                Phase::Collections => query.from = FromParser::parse(parser)?,
                Phase::Joins => query.joins = Join::parse(parser)?,
                Phase::Criteria => query.criteria = Some(WhereParser::parse(parser)?),
                Phase::Aggregates => query.group_by = GroupBy::parse(parser)?,
                Phase::Having => query.having = Some(HavingParser::parse(parser)?),
                Phase::OrderBy => query.order_by = OrderBy::parse(parser)?,
                Phase::EOF => break,
            }
        }

        if query.from.is_empty() {
            return ParseError::new("Missing FROM clause", pivot, parser).err();
        }

        Ok(query)
    }
}

impl TryFrom<&str> for QueryTree {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut parser = QueryParser::new(value);
        QueryTree::parse(&mut parser)
    }
}

use std::fmt;

/// Renders the query as DQL. Parameters are not part of the text.
impl fmt::Display for QueryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let proj = self.projection.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
        let from = self.from.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ");
        write!(f, "SELECT {} FROM {}", proj, from)?;

        for join in &self.joins {
            write!(f, " {}", join)?;
        }
        if let Some(criteria) = &self.criteria {
            write!(f, " WHERE {}", criteria)?;
        }
        if !self.group_by.is_empty() {
            let group = self.group_by.iter().map(|g| g.to_string()).collect::<Vec<_>>().join(", ");
            write!(f, " GROUP BY {}", group)?;
        }
        if let Some(having) = &self.having {
            write!(f, " HAVING {}", having)?;
        }
        if !self.order_by.is_empty() {
            let order = self.order_by.iter().map(|o| o.to_string()).collect::<Vec<_>>().join(", ");
            write!(f, " ORDER BY {}", order)?;
        }

        Ok(())
    }
}
