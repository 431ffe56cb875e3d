use crate::parser::{ast::ScalarExpr, ParseError, QueryParser};

pub struct ArgsExpr {
    pub args: Vec<ScalarExpr>,
    pub distinct: bool,
}

pub struct ArgsParser;

impl ArgsParser {
    pub fn is_args_start(parser: &QueryParser) -> bool {
        parser.current() == '('
    }

    pub fn is_args_end(parser: &QueryParser) -> bool {
        parser.current() == ')'
    }

    /// Function arguments: `(DISTINCT a, b)`, `(*)`, `()`.
    pub fn parse_function_args(parser: &mut QueryParser) -> Result<ArgsExpr, ParseError> {
        let pivot = parser.position;
        if !ArgsParser::is_args_start(parser) {
            return Err(ParseError::new("Invalid args value", pivot, parser));
        }
        parser.next();
        parser.next_non_whitespace();

        let distinct = parser.consume(|c| &c.distinct);
        let args = ArgsParser::parse_until_end(parser, pivot, true)?;

        Ok(ArgsExpr { args, distinct })
    }

    /// Plain value list, as used by `IN (...)`.
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<ScalarExpr>, ParseError> {
        let pivot = parser.position;
        if !ArgsParser::is_args_start(parser) {
            return Err(ParseError::new("Invalid args value", pivot, parser));
        }
        parser.next();

        ArgsParser::parse_until_end(parser, pivot, false)
    }

    fn parse_until_end(parser: &mut QueryParser, pivot: usize, allow_wildcard: bool) -> Result<Vec<ScalarExpr>, ParseError> {
        let mut args: Vec<ScalarExpr> = vec![];
        let mut can_consume = true;

        loop {
            parser.next_non_whitespace();

            if parser.eof() {
                return Err(ParseError::new("Invalid args value", pivot, parser));
            }

            if ArgsParser::is_args_end(parser) {
                if can_consume && !args.is_empty() {
                    return Err(ParseError::new("Invalid args value", pivot, parser));
                }
                parser.next();
                return Ok(args);
            }

            if parser.current() == ',' {
                if can_consume {
                    return Err(ParseError::new("Invalid args value", pivot, parser));
                }
                can_consume = true;
                parser.next();
                continue;
            }

            if !can_consume {
                return Err(ParseError::new("Invalid args value", pivot, parser));
            }
            args.push(ScalarExpr::parse(parser, allow_wildcard)?);
            can_consume = false;
        }
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{ast::{ArgsParser, Column, Literal, ScalarExpr}, QueryParser};

    #[test]
    pub fn test_args_empty() {
        let mut parser = QueryParser::new("()");

        let result = ArgsParser::parse(&mut parser).expect("Failed to parse args");

        assert!(result.is_empty());
        assert!(parser.eof());
    }

    #[test]
    pub fn test_args_values() {
        let mut parser = QueryParser::new("(1, 'a' , o.id) rest");

        let result = ArgsParser::parse(&mut parser).expect("Failed to parse args");

        assert_eq!(result, vec![
            ScalarExpr::Literal(Literal::Int(1)),
            ScalarExpr::Literal(Literal::String("a".into())),
            ScalarExpr::Column(Column::path("o", "id")),
        ]);
        assert_eq!(parser.current(), ' ');
    }

    #[test]
    pub fn test_args_distinct_and_wildcard() {
        let mut parser = QueryParser::new("(DISTINCT o.id)");
        let result = ArgsParser::parse_function_args(&mut parser).expect("Failed to parse args");
        assert!(result.distinct);
        assert_eq!(result.args.len(), 1);

        let mut parser = QueryParser::new("(*)");
        let result = ArgsParser::parse_function_args(&mut parser).expect("Failed to parse args");
        assert_eq!(result.args, vec![ScalarExpr::WildCard]);
    }

    #[test]
    pub fn test_args_wildcard_not_allowed_in_list() {
        let mut parser = QueryParser::new("(*)");

        assert!(ArgsParser::parse(&mut parser).is_err());
    }

    #[test]
    pub fn test_args_double_comma() {
        let mut parser = QueryParser::new("(1,,2)");

        assert!(ArgsParser::parse(&mut parser).is_err());
    }

    #[test]
    pub fn test_args_trailing_comma() {
        let mut parser = QueryParser::new("(1,)");

        assert!(ArgsParser::parse(&mut parser).is_err());
    }

    #[test]
    pub fn test_args_unterminated() {
        let mut parser = QueryParser::new("(1, 2");

        assert!(ArgsParser::parse(&mut parser).is_err());
    }
}
