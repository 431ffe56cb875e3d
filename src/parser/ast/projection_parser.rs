use crate::parser::{ast::SelectItem, ParseError, QueryParser};

pub struct ProjectionParser;

impl ProjectionParser {
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<SelectItem>, ParseError> {
        let pivot = parser.position;
        if !parser.consume(|c| &c.select) {
            return ParseError::new("Invalid select", pivot, parser).err();
        }

        let mut items = vec![];
        loop {
            items.push(SelectItem::parse(parser)?);
            parser.next_non_whitespace();
            if parser.current() != ',' {
                break;
            }
            parser.next();
        }

        if !parser.check_next_phase() {
            return ParseError::new("Invalid projection", parser.position, parser).err();
        }

        Ok(items)
    }
}
