use crate::parser::QueryParser;

/// Case-insensitive keyword matcher.
///
/// A space inside the keyword (`ORDER BY`, `IS NOT NULL`) matches any run of
/// whitespace. The postfix flags decide which characters may follow the
/// keyword for the match to count.
#[derive(Debug, Default)]
pub struct WordComparer {
    pub length: usize,
    pub word: Vec<char>,
    whitespace_postfix: bool,
    full_block_delimiter_postfix: bool,
    eof: bool,
    delimiter: Option<char>,
    optional_postfix: Vec<char>,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.to_uppercase().chars().collect();
        Self {
            length: word.len(),
            word,
            ..Default::default()
        }
    }

    pub fn is_block_delimiter(ch: char) -> bool {
        ch.is_whitespace()
    }

    pub fn is_any_delimiter(ch: char) -> bool {
        ch == ',' || ch == '(' || ch == ')' || ch == '.' || Self::is_block_delimiter(ch)
    }

    pub fn is_identifier_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_'
    }

    pub fn is_current_block_delimiter(parser: &QueryParser) -> bool {
        Self::is_block_delimiter(parser.current())
    }

    /// Number of characters the keyword spans at the cursor, if it matches.
    pub fn match_length(&self, parser: &QueryParser) -> Option<usize> {
        let mut offset = 0;
        for expected in self.word.iter() {
            if *expected == ' ' {
                if !parser.peek(offset).is_whitespace() {
                    return None;
                }
                while parser.peek(offset).is_whitespace() {
                    offset += 1;
                }
                continue;
            }

            let actual = parser.peek(offset);
            if actual == '\0' || actual.to_uppercase().ne(expected.to_uppercase()) {
                return None;
            }
            offset += 1;
        }

        let next = parser.peek(offset);
        if next == '\0' {
            return if self.eof { Some(offset) } else { None };
        }

        if self.delimiter.is_none() && !self.full_block_delimiter_postfix && !self.whitespace_postfix &&
            self.optional_postfix.is_empty() {
            return Some(offset);
        }

        let accepted = self.delimiter == Some(next) ||
            (self.full_block_delimiter_postfix && Self::is_any_delimiter(next)) ||
            (self.whitespace_postfix && Self::is_block_delimiter(next)) ||
            self.optional_postfix.contains(&next);

        accepted.then_some(offset)
    }

    pub fn compare(&self, parser: &QueryParser) -> bool {
        self.match_length(parser).is_some()
    }

    pub fn with_eof(mut self) -> Self { self.eof = true; self }
    pub fn with_whitespace_postfix(mut self) -> Self { self.whitespace_postfix = true; self }
    pub fn with_any_delimiter_postfix(mut self) -> Self { self.full_block_delimiter_postfix = true; self }
    pub fn with_delimiter(mut self, delimiter: char) -> Self { self.delimiter = Some(delimiter); self }
    pub fn with_optional_postfix(mut self, value: char) -> Self { self.optional_postfix.push(value); self }
}
