use crate::parser::{Phase, QueryComparers};

/// Character cursor over a DQL statement.
///
/// Clause parsers move the cursor forward and flip `phase` when they reach
/// the keyword of a later clause. `nesting` counts the subqueries currently
/// being parsed; inside a subquery a closing `)` ends the statement.
#[derive(Debug, Default)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub phase: Phase,
    pub nesting: usize,

    pub comparers: QueryComparers,
}

impl QueryParser {
    pub fn new(query: &str) -> Self {
        let text_v: Vec<char> = query.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            comparers: QueryComparers::new(),
            ..Default::default()
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        self.peek(0)
    }

    pub fn peek(&self, ahead: usize) -> char {
        match self.text_v.get(self.position + ahead) {
            Some(ch) => *ch,
            None => '\0',
        }
    }

    pub fn next(&mut self) {
        if self.position < self.length {
            self.position += 1;
        }
    }

    pub fn next_non_whitespace(&mut self) {
        while self.current().is_whitespace() {
            self.next();
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        let start = start.min(end);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    /// True when the cursor sits on something that closes the current statement.
    pub fn at_statement_end(&self) -> bool {
        self.eof() || (self.nesting > 0 && self.current() == ')')
    }

    /// Skips whitespace and, when the cursor reaches a clause keyword that may
    /// follow the current phase, moves to that phase.
    pub fn check_next_phase(&mut self) -> bool {
        self.next_non_whitespace();

        if self.at_statement_end() {
            self.phase = Phase::EOF;
            return true;
        }

        match self.peek_phase() {
            Some(phase) => {
                self.phase = phase;
                true
            },
            None => false,
        }
    }

    /// Clause keyword at the cursor, if it may follow the current phase.
    pub fn peek_phase(&self) -> Option<Phase> {
        if self.phase < Phase::OrderBy && self.comparers.order_by.compare(self) {
            return Some(Phase::OrderBy);
        }

        if self.phase < Phase::Having && self.comparers.having.compare(self) {
            return Some(Phase::Having);
        }

        if self.phase < Phase::Aggregates && self.comparers.group_by.compare(self) {
            return Some(Phase::Aggregates);
        }

        if self.phase < Phase::Criteria && self.comparers.r#where.compare(self) {
            return Some(Phase::Criteria);
        }

        if self.phase <= Phase::Joins && self.phase >= Phase::Collections && self.comparers.is_join_start(self) {
            return Some(Phase::Joins);
        }

        if self.phase < Phase::Collections && self.comparers.from.compare(self) {
            return Some(Phase::Collections);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Phase, QueryParser};

    #[test]
    pub fn test_check_next_phase_from_projection() {
        let mut parser = QueryParser::new("   FROM Car o");

        assert!(parser.check_next_phase());
        assert_eq!(parser.phase, Phase::Collections);
        assert_eq!(parser.position, 3);
    }

    #[test]
    pub fn test_check_next_phase_does_not_go_back() {
        let mut parser = QueryParser::new("FROM Car o");
        parser.phase = Phase::Criteria;

        assert!(!parser.check_next_phase());
        assert_eq!(parser.phase, Phase::Criteria);
    }

    #[test]
    pub fn test_check_next_phase_join_repeats() {
        let mut parser = QueryParser::new("LEFT JOIN o.colors colors");
        parser.phase = Phase::Joins;

        assert!(parser.check_next_phase());
        assert_eq!(parser.phase, Phase::Joins);
    }

    #[test]
    pub fn test_closing_parenthesis_ends_nested_statement() {
        let mut parser = QueryParser::new(" ) ORDER BY o.id");
        parser.phase = Phase::Criteria;
        parser.nesting = 1;

        assert!(parser.check_next_phase());
        assert_eq!(parser.phase, Phase::EOF);
        assert_eq!(parser.current(), ')');
    }

    #[test]
    pub fn test_jump_is_clamped() {
        let mut parser = QueryParser::new("abc");
        parser.jump(10);

        assert!(parser.eof());
        assert_eq!(parser.current(), '\0');
    }
}
