use crate::parser::{ast::{ScalarExpr, TextCollector}, ParseError, QueryParser};
use std::fmt;

/// One entry of the SELECT list. `hidden` items (`AS HIDDEN alias`) are
/// computed for ORDER BY only and are not part of the hydrated result.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expression: ScalarExpr,
    pub alias: Option<String>,
    pub hidden: bool,
}

impl SelectItem {
    pub fn new(expression: ScalarExpr) -> Self {
        Self { expression, alias: None, hidden: false }
    }

    pub fn aliased(expression: ScalarExpr, alias: &str) -> Self {
        Self { expression, alias: Some(alias.to_string()), hidden: false }
    }

    pub fn hidden(expression: ScalarExpr, alias: &str) -> Self {
        Self { expression, alias: Some(alias.to_string()), hidden: true }
    }

    pub fn parse(parser: &mut QueryParser) -> Result<SelectItem, ParseError> {
        let expression = ScalarExpr::parse(parser, false)?;

        parser.next_non_whitespace();
        if parser.current() == ',' || parser.at_statement_end() || parser.peek_phase().is_some() {
            return Ok(SelectItem::new(expression));
        }

        if parser.consume(|c| &c.alias) {
            parser.next_non_whitespace();
        }

        let hidden = parser.consume(|c| &c.hidden);
        parser.next_non_whitespace();

        let pivot = parser.position;
        let alias = TextCollector::collect(parser)
            .map_err(|_| ParseError::new("Invalid alias for identifier", pivot, parser))?;

        Ok(SelectItem { expression, alias: Some(alias), hidden })
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {}{}", if self.hidden { "HIDDEN " } else { "" }, alias)?;
        }
        Ok(())
    }
}
