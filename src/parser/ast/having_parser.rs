use crate::parser::{ParseError, Predicate, QueryParser};

pub struct HavingParser;

impl HavingParser {
    pub fn parse(parser: &mut QueryParser) -> Result<Predicate, ParseError> {
        if !parser.consume(|c| &c.having) {
            return ParseError::new("Invalid having", parser.position, parser).err();
        }

        let predicate = Predicate::parse(parser)?;

        if !parser.check_next_phase() {
            return ParseError::new("Invalid having", parser.position, parser).err();
        }

        Ok(predicate)
    }
}
