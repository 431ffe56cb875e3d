use crate::parser::{ast::Literal, ParseError, QueryParser};

pub struct BoolParser;

impl BoolParser {
    pub fn is_bool(parser: &QueryParser) -> bool {
        parser.matches(|c| &c.b_true) || parser.matches(|c| &c.b_false)
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        if parser.consume(|c| &c.b_true) {
            return Ok(Literal::Bool(true))
        }
        if parser.consume(|c| &c.b_false) {
            return Ok(Literal::Bool(false))
        }

        Err(ParseError::new("Invalid boolean", parser.position, parser))
    }
}
