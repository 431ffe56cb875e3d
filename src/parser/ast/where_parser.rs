use crate::parser::{ParseError, Predicate, QueryParser};

pub struct WhereParser;

impl WhereParser {
    pub fn parse(parser: &mut QueryParser) -> Result<Predicate, ParseError> {
        if !parser.consume(|c| &c.r#where) {
            return ParseError::new("Invalid where", parser.position, parser).err();
        }

        let predicate = Predicate::parse(parser)?;

        if !parser.check_next_phase() {
            return ParseError::new("Invalid predicate", parser.position, parser).err();
        }

        Ok(predicate)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ComparatorOp, Phase, Predicate, QueryParser, WhereParser};

    fn parser_at_where(text: &str) -> QueryParser {
        let mut parser = QueryParser::new(text);
        parser.phase = Phase::Joins;
        assert!(parser.check_next_phase());
        assert_eq!(parser.phase, Phase::Criteria);
        parser
    }

    #[test]
    pub fn test_where_single() {
        let mut parser = parser_at_where("WHERE o.colors = :foo");

        let result = WhereParser::parse(&mut parser).expect("Failed to parse where");

        match result {
            Predicate::Compare { op, .. } => assert_eq!(op, ComparatorOp::Eq),
            _ => panic!(),
        }
        assert_eq!(parser.phase, Phase::EOF);
    }

    #[test]
    pub fn test_where_stops_at_group_by() {
        let mut parser = parser_at_where("WHERE colors.name LIKE :name AND o.dateCreated is null AND o.price > 35 GROUP BY o.colors");

        let result = WhereParser::parse(&mut parser).expect("Failed to parse where");

        match result {
            Predicate::And(predicates) => assert_eq!(predicates.len(), 3),
            _ => panic!(),
        }
        assert_eq!(parser.phase, Phase::Aggregates);
    }

    #[test]
    pub fn test_where_parenthesis_right_after_keyword() {
        let mut parser = parser_at_where("WHERE(o.id = 1 OR o.id = 2) ORDER BY o.id");

        let result = WhereParser::parse(&mut parser).expect("Failed to parse where");

        assert!(matches!(result, Predicate::Or(_)));
        assert_eq!(parser.phase, Phase::OrderBy);
    }

    #[test]
    pub fn test_where_missing_keyword() {
        let mut parser = QueryParser::new("WHEN o.id = 1");
        parser.phase = Phase::Criteria;

        match WhereParser::parse(&mut parser) {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Invalid where"),
        }
    }

    #[test]
    pub fn test_where_trailing_text() {
        let mut parser = parser_at_where("WHERE o.a = 1 o.b = 2");

        assert!(WhereParser::parse(&mut parser).is_err());
    }
}
