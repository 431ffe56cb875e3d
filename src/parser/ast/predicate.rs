use crate::parser::{ast::{ArgsParser, ComparatorOp, QueryTree, ScalarExpr}, ParseError, QueryParser};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),

    // Predicates that *embed* scalars:
    Compare { left: ScalarExpr, op: ComparatorOp, right: ScalarExpr }, // =, <, <=, >, >=, <>, !=
    IsNull  { expr: ScalarExpr, negated: bool },
    InList  { expr: ScalarExpr, list: Vec<ScalarExpr>, negated: bool },
    Like    { expr: ScalarExpr, pattern: ScalarExpr, negated: bool },
    InSubquery { expr: ScalarExpr, subquery: Box<QueryTree>, negated: bool },
}

impl Predicate {
    pub fn compare(left: ScalarExpr, op: ComparatorOp, right: ScalarExpr) -> Self {
        Predicate::Compare { left, op, right }
    }

    pub fn in_subquery(expr: ScalarExpr, subquery: QueryTree) -> Self {
        Predicate::InSubquery { expr, subquery: Box::new(subquery), negated: false }
    }

    pub fn parse_single(parser: &mut QueryParser) -> Result<Self, ParseError> {
        let pivot = parser.position;
        let left = ScalarExpr::parse(parser, false)?;

        parser.next_non_whitespace();

        if let Some(op) = ComparatorOp::check(parser) {
            let right = ScalarExpr::parse(parser, false)?;
            return Ok(Self::Compare { left, op, right });
        }

        if parser.consume(|c| &c.is_null) {
            return Ok(Self::IsNull { expr: left, negated: false });
        }

        if parser.consume(|c| &c.is_not_null) {
            return Ok(Self::IsNull { expr: left, negated: true });
        }

        if parser.consume(|c| &c.r#in) {
            return Self::parse_in(parser, left, false);
        }

        if parser.consume(|c| &c.not_in) {
            return Self::parse_in(parser, left, true);
        }

        if parser.consume(|c| &c.like) {
            let pattern = ScalarExpr::parse(parser, false)?;
            return Ok(Self::Like { expr: left, pattern, negated: false });
        }

        if parser.consume(|c| &c.not_like) {
            let pattern = ScalarExpr::parse(parser, false)?;
            return Ok(Self::Like { expr: left, pattern, negated: true });
        }

        ParseError::new("Invalid predicate", pivot, parser).err()
    }

    fn parse_in(parser: &mut QueryParser, expr: ScalarExpr, negated: bool) -> Result<Self, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;
        if !ArgsParser::is_args_start(parser) {
            return ParseError::new("Invalid IN list", pivot, parser).err();
        }

        let mut cursor = pivot + 1;
        while parser.text_v.get(cursor).is_some_and(|ch| ch.is_whitespace()) {
            cursor += 1;
        }
        let opens_subquery = {
            let saved = parser.position;
            parser.position = cursor;
            let found = parser.matches(|c| &c.select);
            parser.position = saved;
            found
        };

        if !opens_subquery {
            let list = ArgsParser::parse(parser)?;
            return Ok(Self::InList { expr, list, negated });
        }

        parser.position = cursor;
        let subquery = QueryTree::parse_nested(parser)?;
        parser.next_non_whitespace();
        if parser.current() != ')' {
            return ParseError::new("Unterminated subquery", pivot, parser).err();
        }
        parser.next();

        Ok(Self::InSubquery { expr, subquery: Box::new(subquery), negated })
    }

    fn parse_term(parser: &mut QueryParser) -> Result<Self, ParseError> {
        parser.next_non_whitespace();

        if parser.consume(|c| &c.not) {
            return Ok(Self::Not(Box::new(Self::parse_term(parser)?)));
        }

        if parser.current() == '(' {
            let pivot = parser.position;
            parser.next();
            let inner = Self::parse_or(parser)?;
            parser.next_non_whitespace();
            if parser.current() != ')' {
                return ParseError::new("Invalid predicate", pivot, parser).err();
            }
            parser.next();
            return Ok(inner);
        }

        Self::parse_single(parser)
    }

    fn parse_and(parser: &mut QueryParser) -> Result<Self, ParseError> {
        let mut predicates = vec![Self::parse_term(parser)?];
        loop {
            parser.next_non_whitespace();
            if !parser.consume(|c| &c.and) {
                break;
            }
            predicates.push(Self::parse_term(parser)?);
        }

        Ok(Self::flatten(predicates, Self::And))
    }

    fn parse_or(parser: &mut QueryParser) -> Result<Self, ParseError> {
        let mut predicates = vec![Self::parse_and(parser)?];
        loop {
            parser.next_non_whitespace();
            if !parser.consume(|c| &c.or) {
                break;
            }
            predicates.push(Self::parse_and(parser)?);
        }

        Ok(Self::flatten(predicates, Self::Or))
    }

    fn flatten(mut predicates: Vec<Predicate>, wrap: fn(Vec<Predicate>) -> Predicate) -> Predicate {
        match predicates.len() {
            1 => predicates.remove(0),
            _ => wrap(predicates),
        }
    }

    /// `AND`/`OR` with the usual precedence, parentheses and `NOT`.
    pub fn parse(parser: &mut QueryParser) -> Result<Self, ParseError> {
        Self::parse_or(parser)
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::And(_) | Predicate::Or(_) => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::And(list) | Predicate::Or(list) => {
                let separator = if matches!(self, Predicate::And(_)) { " AND " } else { " OR " };
                for (i, predicate) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", separator)?;
                    }
                    predicate.fmt_nested(f)?;
                }
                Ok(())
            },
            Predicate::Not(inner) => write!(f, "NOT ({})", inner),
            Predicate::Compare { left, op, right } => write!(f, "{} {} {}", left, op, right),
            Predicate::IsNull { expr, negated } => {
                write!(f, "{} IS {}NULL", expr, if *negated { "NOT " } else { "" })
            },
            Predicate::InList { expr, list, negated } => {
                let list = list.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "{} {}IN({})", expr, if *negated { "NOT " } else { "" }, list)
            },
            Predicate::Like { expr, pattern, negated } => {
                write!(f, "{} {}LIKE {}", expr, if *negated { "NOT " } else { "" }, pattern)
            },
            Predicate::InSubquery { expr, subquery, negated } => {
                write!(f, "{} {}IN({})", expr, if *negated { "NOT " } else { "" }, subquery)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{ComparatorOp, Literal, Predicate, ScalarExpr}, QueryParser};

    #[test]
    pub fn test_predicate_single_equal() {
        let mut parser = QueryParser::new("o.colors = :foo");

        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");

        assert_eq!(result, Predicate::compare(ScalarExpr::column("o", "colors"), ComparatorOp::Eq, ScalarExpr::parameter("foo")));
    }

    #[test]
    pub fn test_predicate_single_without_spaces() {
        let mut parser = QueryParser::new("o.price>=10");

        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");

        match result {
            Predicate::Compare { op, .. } => assert_eq!(op, ComparatorOp::GtEq),
            _ => panic!(),
        };
    }

    #[test]
    pub fn test_predicate_single_is_null() {
        let mut parser = QueryParser::new("o.dateCreated IS NULL");

        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");

        assert_eq!(result, Predicate::IsNull { expr: ScalarExpr::column("o", "dateCreated"), negated: false });
    }

    #[test]
    pub fn test_predicate_single_is_not_null() {
        let mut parser = QueryParser::new("o.dateCreated is not null");

        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");

        assert_eq!(result, Predicate::IsNull { expr: ScalarExpr::column("o", "dateCreated"), negated: true });
    }

    #[test]
    pub fn test_predicate_in_list() {
        let mut parser = QueryParser::new("colors.name NOT IN ('red', 'blue')");

        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");

        match result {
            Predicate::InList { list, negated, .. } => {
                assert!(negated);
                assert_eq!(list, vec![
                    ScalarExpr::Literal(Literal::String("red".into())),
                    ScalarExpr::Literal(Literal::String("blue".into())),
                ]);
            },
            _ => panic!(),
        };
    }

    #[test]
    pub fn test_predicate_in_subquery() {
        let text = "o IN(SELECT o_2 FROM Car o_2 LEFT JOIN o_2.colors colors_2 WHERE o_2.colors = :foo)";
        let mut parser = QueryParser::new(text);

        let result = Predicate::parse(&mut parser).expect("Failed to parse predicate");

        match &result {
            Predicate::InSubquery { expr, subquery, negated } => {
                assert!(!negated);
                assert_eq!(expr, &ScalarExpr::name("o"));
                assert_eq!(subquery.joins.len(), 1);
                assert!(subquery.criteria.is_some());
            },
            _ => panic!(),
        };
        assert!(parser.eof());
        assert_eq!(result.to_string(), text);
    }

    #[test]
    pub fn test_predicate_like() {
        let mut parser = QueryParser::new("o.name not like '%thing%'");

        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");

        match result {
            Predicate::Like { negated, .. } => assert!(negated),
            _ => panic!(),
        };
    }

    #[test]
    pub fn test_predicate_and_or_precedence() {
        let mut parser = QueryParser::new("o.a = 1 OR o.b = 2 AND o.c = 3");

        let result = Predicate::parse(&mut parser).expect("Failed to parse predicate");

        match &result {
            Predicate::Or(list) => {
                assert_eq!(list.len(), 2);
                assert!(matches!(list[1], Predicate::And(_)));
            },
            _ => panic!(),
        };
        assert_eq!(result.to_string(), "o.a = 1 OR (o.b = 2 AND o.c = 3)");
    }

    #[test]
    pub fn test_predicate_parentheses_and_not() {
        let mut parser = QueryParser::new("NOT (o.a = 1 OR o.b = 2) AND o.c IS NULL");

        let result = Predicate::parse(&mut parser).expect("Failed to parse predicate");

        match &result {
            Predicate::And(list) => {
                assert_eq!(list.len(), 2);
                assert!(matches!(list[0], Predicate::Not(_)));
            },
            _ => panic!(),
        };
        assert_eq!(result.to_string(), "NOT (o.a = 1 OR o.b = 2) AND o.c IS NULL");
    }

    #[test]
    pub fn test_predicate_stops_before_clause() {
        let mut parser = QueryParser::new("o.a = 1 ORDER BY o.a");

        let result = Predicate::parse(&mut parser).expect("Failed to parse predicate");

        assert!(matches!(result, Predicate::Compare { .. }));
        assert_eq!(parser.current(), 'O');
    }

    #[test]
    pub fn test_predicate_invalid() {
        let mut parser = QueryParser::new("o.a o.b");

        let result = Predicate::parse_single(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.message, "Invalid predicate");
                assert_eq!(err.start, 0);
            },
        }
    }
}
