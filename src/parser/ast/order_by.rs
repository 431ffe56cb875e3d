use crate::parser::{ParseError, QueryParser, ScalarExpr};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub expr: ScalarExpr,
    pub ascending: bool,
}

impl OrderBy {
    pub fn asc(expr: ScalarExpr) -> Self {
        Self { expr, ascending: true }
    }

    pub fn desc(expr: ScalarExpr) -> Self {
        Self { expr, ascending: false }
    }

    pub fn parse_single(parser: &mut QueryParser) -> Result<Self, ParseError> {
        let expr = ScalarExpr::parse(parser, false)?;
        parser.next_non_whitespace();

        if parser.consume(|c| &c.desc) {
            return Ok(OrderBy { expr, ascending: false });
        }

        parser.consume(|c| &c.asc);
        Ok(OrderBy { expr, ascending: true })
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Vec<Self>, ParseError> {
        if !parser.consume(|c| &c.order_by) {
            return ParseError::new("Invalid order by", parser.position, parser).err();
        }

        let mut orders: Vec<Self> = vec![];
        loop {
            orders.push(Self::parse_single(parser)?);

            parser.next_non_whitespace();
            if parser.current() != ',' {
                break;
            }
            parser.next();
        }

        if !parser.check_next_phase() {
            return ParseError::new("Invalid order by", parser.position, parser).err();
        }

        Ok(orders)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.expr, if self.ascending { "ASC" } else { "DESC" })
    }
}
