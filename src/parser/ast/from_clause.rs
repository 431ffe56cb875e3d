use crate::parser::{ast::TextCollector, ParseError, QueryParser};
use std::fmt;

/// `FROM <entity> <alias>`; the first one of a query is its root.
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub entity: String,
    pub alias: String,
}

impl FromClause {
    pub fn new(entity: &str, alias: &str) -> Self {
        Self { entity: entity.to_string(), alias: alias.to_string() }
    }
}

impl fmt::Display for FromClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.entity, self.alias)
    }
}

pub struct FromParser;

impl FromParser {
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<FromClause>, ParseError> {
        let pivot = parser.position;
        if !parser.consume(|c| &c.from) {
            return ParseError::new("Invalid from", pivot, parser).err();
        }

        let mut clauses = vec![];
        loop {
            parser.next_non_whitespace();
            let entity = TextCollector::collect_entity_name(parser)?;

            parser.next_non_whitespace();
            if parser.consume(|c| &c.alias) {
                parser.next_non_whitespace();
            }
            let pivot = parser.position;
            if parser.peek_phase().is_some() {
                return ParseError::new("Missing alias for entity", pivot, parser).err();
            }
            let alias = TextCollector::collect(parser)
                .map_err(|_| ParseError::new("Missing alias for entity", pivot, parser))?;

            clauses.push(FromClause { entity, alias });

            parser.next_non_whitespace();
            if parser.current() != ',' {
                break;
            }
            parser.next();
        }

        if !parser.check_next_phase() {
            return ParseError::new("Invalid collection", parser.position, parser).err();
        }

        Ok(clauses)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{FromClause, FromParser}, Phase, QueryParser};

    fn parser_at_from(text: &str) -> QueryParser {
        let mut parser = QueryParser::new(text);
        assert!(parser.check_next_phase());
        parser
    }

    #[test]
    pub fn test_from() {
        let mut parser = parser_at_from(r"FROM App\Entity\DummyCar o LEFT JOIN o.colors colors");

        let result = FromParser::parse(&mut parser).expect("Failed to parse from");

        assert_eq!(result, vec![FromClause::new(r"App\Entity\DummyCar", "o")]);
        assert_eq!(parser.phase, Phase::Joins);
    }

    #[test]
    pub fn test_from_multiple() {
        let mut parser = parser_at_from("FROM Car o, Brand AS b WHERE o.brand = b");

        let result = FromParser::parse(&mut parser).expect("Failed to parse from");

        assert_eq!(result, vec![FromClause::new("Car", "o"), FromClause::new("Brand", "b")]);
        assert_eq!(parser.phase, Phase::Criteria);
    }

    #[test]
    pub fn test_from_without_alias() {
        let mut parser = parser_at_from("FROM Car WHERE 1 = 1");

        let result = FromParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Missing alias for entity"),
        }
    }
}
