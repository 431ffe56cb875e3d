use ordered_float::NotNan;

use crate::parser::{ast::Literal, ParseError, QueryParser, WordComparer};

pub struct NumberParser;

impl NumberParser {
    pub fn is_number(parser: &QueryParser) -> bool {
        let current = parser.current();
        current.is_ascii_digit() ||
            ((current == '-' || current == '+') && parser.peek(1).is_ascii_digit())
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        let pivot = parser.position;
        let mut is_float = false;

        if !NumberParser::is_number(parser) {
            return Err(ParseError::new("Invalid number value", pivot, parser));
        }

        if parser.current() == '-' || parser.current() == '+' {
            parser.next();
        }

        while parser.current().is_ascii_digit() || parser.current() == '.' {
            if parser.current() == '.' {
                if is_float {
                    return Err(ParseError::new("Invalid number value", pivot, parser));
                }
                is_float = true;
            }
            parser.next();
        }

        if !parser.eof() && WordComparer::is_identifier_char(parser.current()) {
            return Err(ParseError::new("Invalid number value", pivot, parser));
        }

        let number = parser.text_from_pivot(pivot);
        let number = match is_float {
            true => {
                let value = number.parse::<f64>().map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
                Literal::Float(NotNan::new(value).map_err(|_| ParseError::new("Invalid number", pivot, parser))?)
            },
            false => Literal::Int(number.parse::<i64>().map_err(|_| ParseError::new("Invalid number", pivot, parser))?),
        };

        Ok(number)
    }
}
