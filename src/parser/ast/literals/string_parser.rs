use crate::parser::{ast::Literal, ParseError, QueryParser};

pub struct StringParser;

impl StringParser {
    pub fn is_string_delimiter(parser: &QueryParser) -> bool {
        parser.current() == '\'' || parser.current() == '"'
    }

    /// Quoted string; the delimiter is escaped by doubling it.
    pub fn parse(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        let pivot = parser.position;

        if !StringParser::is_string_delimiter(parser) {
            return Err(ParseError::new("Invalid string value", pivot, parser));
        }
        let delimiter = parser.current();
        parser.next();

        let mut text = String::new();
        loop {
            if parser.eof() {
                return Err(ParseError::new("Invalid string", pivot, parser));
            }

            let current = parser.current();
            if current == delimiter {
                if parser.peek(1) == delimiter {
                    text.push(delimiter);
                    parser.jump(2);
                    continue;
                }
                parser.next();
                break;
            }

            text.push(current);
            parser.next();
        }

        Ok(Literal::String(text))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{ast::{Literal, StringParser}, QueryParser};

    #[test]
    pub fn test_string_parser() {
        let mut parser = QueryParser::new("'identifier'");

        let result = StringParser::parse(&mut parser).expect("Failed to parse string");

        assert_eq!(result, Literal::String("identifier".into()));
        assert!(parser.eof());
    }

    #[test]
    pub fn test_string_parser_double_quotes() {
        let mut parser = QueryParser::new("\"start\tend\" rest");

        let result = StringParser::parse(&mut parser).expect("Failed to parse string");

        assert_eq!(result, Literal::String("start\tend".into()));
        assert_eq!(parser.current(), ' ');
    }

    #[test]
    pub fn test_string_parser_escaped_delimiter() {
        let mut parser = QueryParser::new("'it''s'");

        let result = StringParser::parse(&mut parser).expect("Failed to parse string");

        assert_eq!(result, Literal::String("it's".into()));
    }

    #[test]
    pub fn test_string_parser_unterminated() {
        let mut parser = QueryParser::new("'never ends");

        let result = StringParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.start, 0);
                assert_eq!(err.message, "Invalid string");
            },
        }
    }
}
