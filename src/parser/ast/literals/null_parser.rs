use crate::parser::{ast::Literal, ParseError, QueryParser};

pub struct NullParser;

impl NullParser {
    pub fn is_null(parser: &QueryParser) -> bool {
        parser.matches(|c| &c.null)
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        if parser.consume(|c| &c.null) {
            return Ok(Literal::Null);
        }

        Err(ParseError::new("Invalid null", parser.position, parser))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{ast::{Literal, NullParser}, QueryParser};

    #[test]
    pub fn test_null_parser() {
        let mut parser = QueryParser::new("null");

        assert_eq!(NullParser::parse(&mut parser).expect("Failed to parse null"), Literal::Null);
    }

    #[test]
    pub fn test_null_parser_prefix() {
        let parser = QueryParser::new("nullable");

        assert!(!NullParser::is_null(&parser));
    }
}
