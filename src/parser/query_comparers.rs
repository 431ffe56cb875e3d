use crate::parser::{QueryParser, WordComparer};

#[derive(Debug)]
pub struct QueryComparers {
    pub select: WordComparer,
    pub alias: WordComparer,
    pub hidden: WordComparer,
    pub from: WordComparer,
    pub inner_join: WordComparer,
    pub left_join: WordComparer,
    pub join: WordComparer,
    pub with: WordComparer,
    pub r#where: WordComparer,
    pub group_by: WordComparer,
    pub asc: WordComparer,
    pub desc: WordComparer,
    pub having: WordComparer,
    pub order_by: WordComparer,
    pub and: WordComparer,
    pub or: WordComparer,
    pub not: WordComparer,
    pub equal: WordComparer,
    pub not_equal_b: WordComparer, // basic
    pub not_equal_c: WordComparer, // c
    pub greater_than: WordComparer,
    pub greater_than_or_equal: WordComparer,
    pub less_than: WordComparer,
    pub less_than_or_equal: WordComparer,
    pub like: WordComparer,
    pub not_like: WordComparer,
    pub is_null: WordComparer,
    pub is_not_null: WordComparer,
    pub r#in: WordComparer,
    pub not_in: WordComparer,
    pub distinct: WordComparer,
    pub case: WordComparer,
    pub when: WordComparer,
    pub then: WordComparer,
    pub r#else: WordComparer,
    pub end: WordComparer,
    pub b_true: WordComparer,
    pub b_false: WordComparer,
    pub null: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            select: WordComparer::new("SELECT").with_whitespace_postfix(),
            alias: WordComparer::new("AS").with_whitespace_postfix(),
            hidden: WordComparer::new("HIDDEN").with_whitespace_postfix(),
            from: WordComparer::new("FROM").with_whitespace_postfix(),
            inner_join: WordComparer::new("INNER JOIN").with_whitespace_postfix(),
            left_join: WordComparer::new("LEFT JOIN").with_whitespace_postfix(),
            join: WordComparer::new("JOIN").with_whitespace_postfix(),
            with: WordComparer::new("WITH").with_whitespace_postfix().with_delimiter('('),
            r#where: WordComparer::new("WHERE").with_whitespace_postfix().with_delimiter('('),
            group_by: WordComparer::new("GROUP BY").with_whitespace_postfix(),
            asc: WordComparer::new("ASC").with_whitespace_postfix().with_eof().with_optional_postfix(',').with_optional_postfix(')'),
            desc: WordComparer::new("DESC").with_whitespace_postfix().with_eof().with_optional_postfix(',').with_optional_postfix(')'),
            having: WordComparer::new("HAVING").with_whitespace_postfix().with_delimiter('('),
            order_by: WordComparer::new("ORDER BY").with_whitespace_postfix(),
            and: WordComparer::new("AND").with_whitespace_postfix().with_delimiter('('),
            or: WordComparer::new("OR").with_whitespace_postfix().with_delimiter('('),
            not: WordComparer::new("NOT").with_whitespace_postfix().with_delimiter('('),
            equal: WordComparer::new("="),
            not_equal_b: WordComparer::new("<>"),
            not_equal_c: WordComparer::new("!="),
            greater_than: WordComparer::new(">"),
            greater_than_or_equal: WordComparer::new(">="),
            less_than: WordComparer::new("<"),
            less_than_or_equal: WordComparer::new("<="),
            like: WordComparer::new("LIKE").with_whitespace_postfix(),
            not_like: WordComparer::new("NOT LIKE").with_whitespace_postfix(),
            is_null: WordComparer::new("IS NULL").with_any_delimiter_postfix().with_eof(),
            is_not_null: WordComparer::new("IS NOT NULL").with_any_delimiter_postfix().with_eof(),
            r#in: WordComparer::new("IN").with_delimiter('(').with_whitespace_postfix(),
            not_in: WordComparer::new("NOT IN").with_delimiter('(').with_whitespace_postfix(),
            distinct: WordComparer::new("DISTINCT").with_whitespace_postfix(),
            case: WordComparer::new("CASE").with_whitespace_postfix(),
            when: WordComparer::new("WHEN").with_whitespace_postfix().with_delimiter('('),
            then: WordComparer::new("THEN").with_whitespace_postfix().with_delimiter('('),
            r#else: WordComparer::new("ELSE").with_whitespace_postfix().with_delimiter('('),
            end: WordComparer::new("END").with_any_delimiter_postfix().with_eof(),
            b_true: WordComparer::new("TRUE").with_any_delimiter_postfix().with_eof(),
            b_false: WordComparer::new("FALSE").with_any_delimiter_postfix().with_eof(),
            null: WordComparer::new("NULL").with_any_delimiter_postfix().with_eof(),
        }
    }

    pub fn is_join_start(&self, parser: &QueryParser) -> bool {
        self.inner_join.compare(parser) || self.left_join.compare(parser) || self.join.compare(parser)
    }
}

impl QueryParser {
    /// Consumes the keyword picked from the comparers when it matches at the cursor.
    pub fn consume(&mut self, pick: impl Fn(&QueryComparers) -> &WordComparer) -> bool {
        match pick(&self.comparers).match_length(self) {
            Some(length) => {
                self.jump(length);
                true
            },
            None => false,
        }
    }

    pub fn matches(&self, pick: impl Fn(&QueryComparers) -> &WordComparer) -> bool {
        pick(&self.comparers).compare(self)
    }
}
