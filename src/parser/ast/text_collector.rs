use crate::parser::{ParseError, QueryParser, WordComparer};

pub struct TextCollector;

impl TextCollector {
    /// Identifier made of alphanumerics and `_`; empty text is an error.
    pub fn collect(parser: &mut QueryParser) -> Result<String, ParseError> {
        TextCollector::collect_with(parser, &WordComparer::is_identifier_char)
    }

    /// Entity names may be namespaced, `App\Entity\Car`.
    pub fn collect_entity_name(parser: &mut QueryParser) -> Result<String, ParseError> {
        TextCollector::collect_with(parser, &|current| WordComparer::is_identifier_char(current) || current == '\\')
    }

    fn collect_with(parser: &mut QueryParser, accept: &dyn Fn(char) -> bool) -> Result<String, ParseError> {
        let pivot = parser.position;
        while !parser.eof() && accept(parser.current()) {
            parser.next();
        }

        if parser.position == pivot {
            return Err(ParseError::new("Invalid text", pivot, parser));
        }

        Ok(parser.text_from_pivot(pivot))
    }
}
