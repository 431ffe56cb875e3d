use crate::parser::{ast::Column, ParseError, QueryParser};

pub struct GroupBy;

impl GroupBy {
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<Column>, ParseError> {
        if !parser.consume(|c| &c.group_by) {
            return ParseError::new("Invalid group by", parser.position, parser).err();
        }

        let mut groups: Vec<Column> = vec![];
        loop {
            parser.next_non_whitespace();
            groups.push(Column::parse(parser)?);

            parser.next_non_whitespace();
            if parser.current() != ',' {
                break;
            }
            parser.next();
        }

        if !parser.check_next_phase() {
            return ParseError::new("Invalid group by", parser.position, parser).err();
        }

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{Column, GroupBy}, Phase, QueryParser};

    fn parser_at_group_by(text: &str) -> QueryParser {
        let mut parser = QueryParser::new(text);
        parser.phase = Phase::Criteria;
        assert!(parser.check_next_phase());
        parser
    }

    #[test]
    pub fn test_group_by() {
        let mut parser = parser_at_group_by("GROUP BY o.colors HAVING counter > 3");

        let result = GroupBy::parse(&mut parser).expect("Failed to parse group by");

        assert_eq!(result, vec![Column::path("o", "colors")]);
        assert_eq!(parser.phase, Phase::Having);
    }

    #[test]
    pub fn test_group_by_many() {
        let mut parser = parser_at_group_by("GROUP BY o.colors, brand , o.id");

        let result = GroupBy::parse(&mut parser).expect("Failed to parse group by");

        assert_eq!(result, vec![Column::path("o", "colors"), Column::name("brand"), Column::path("o", "id")]);
        assert_eq!(parser.phase, Phase::EOF);
    }

    #[test]
    pub fn test_group_by_wrong() {
        let mut parser = parser_at_group_by("GROUP BY o.colors,, o.id");

        assert!(GroupBy::parse(&mut parser).is_err());
    }

    #[test]
    pub fn test_group_by_expression_not_allowed() {
        let mut parser = parser_at_group_by("GROUP BY 'a'");

        assert!(GroupBy::parse(&mut parser).is_err());
    }
}
