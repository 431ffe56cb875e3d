use crate::parser::{ast::{ScalarExpr, TextCollector}, ParseError, QueryParser};

pub struct ParamParser;

impl ParamParser {
    pub fn is_param(parser: &QueryParser) -> bool {
        parser.current() == ':'
    }

    /// Named parameter, `:name`.
    pub fn parse(parser: &mut QueryParser) -> Result<ScalarExpr, ParseError> {
        let pivot = parser.position;
        if !ParamParser::is_param(parser) {
            return Err(ParseError::new("Invalid Parameter", pivot, parser));
        }
        parser.next();

        let name = TextCollector::collect(parser)?;

        Ok(ScalarExpr::Parameter(name))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{ast::{ParamParser, ScalarExpr}, QueryParser};

    #[test]
    pub fn test_param_parser() {
        let mut parser = QueryParser::new(":foo");

        let result = ParamParser::parse(&mut parser).expect("Failed to parse parameter");

        assert_eq!(result, ScalarExpr::Parameter("foo".into()));
    }

    #[test]
    pub fn test_param_parser_stops_at_paren() {
        let mut parser = QueryParser::new(":foo_2)");

        let result = ParamParser::parse(&mut parser).expect("Failed to parse parameter");

        assert_eq!(result, ScalarExpr::Parameter("foo_2".into()));
        assert_eq!(parser.current(), ')');
    }

    #[test]
    pub fn test_param_parser_without_name() {
        let mut parser = QueryParser::new(": ");

        assert!(ParamParser::parse(&mut parser).is_err());
    }
}
