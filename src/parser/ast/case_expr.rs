use crate::parser::{ast::{Predicate, ScalarExpr}, ParseError, QueryParser};
use std::fmt;

/// Searched `CASE WHEN <predicate> THEN <expr> ... [ELSE <expr>] END`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpr {
    pub whens: Vec<(Predicate, ScalarExpr)>,
    pub else_expr: Option<Box<ScalarExpr>>,
}

impl CaseExpr {
    pub fn is_case(parser: &QueryParser) -> bool {
        parser.matches(|c| &c.case)
    }

    pub fn parse(parser: &mut QueryParser) -> Result<CaseExpr, ParseError> {
        let pivot = parser.position;
        if !parser.consume(|c| &c.case) {
            return ParseError::new("Invalid case expression", pivot, parser).err();
        }

        let mut whens = vec![];
        loop {
            parser.next_non_whitespace();
            if !parser.consume(|c| &c.when) {
                break;
            }

            let condition = Predicate::parse(parser)?;
            parser.next_non_whitespace();
            if !parser.consume(|c| &c.then) {
                return ParseError::new("Missing THEN in case expression", pivot, parser).err();
            }

            let result = ScalarExpr::parse(parser, false)?;
            whens.push((condition, result));
        }

        if whens.is_empty() {
            return ParseError::new("Missing WHEN in case expression", pivot, parser).err();
        }

        let else_expr = match parser.consume(|c| &c.r#else) {
            true => {
                let expr = ScalarExpr::parse(parser, false)?;
                parser.next_non_whitespace();
                Some(Box::new(expr))
            },
            false => None,
        };

        if !parser.consume(|c| &c.end) {
            return ParseError::new("Missing END in case expression", pivot, parser).err();
        }

        Ok(CaseExpr { whens, else_expr })
    }
}

impl fmt::Display for CaseExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CASE")?;
        for (condition, result) in &self.whens {
            write!(f, " WHEN {} THEN {}", condition, result)?;
        }
        if let Some(else_expr) = &self.else_expr {
            write!(f, " ELSE {}", else_expr)?;
        }
        write!(f, " END")
    }
}
