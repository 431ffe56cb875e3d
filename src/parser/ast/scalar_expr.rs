use crate::parser::{ast::{ArgsParser, BoolParser, CaseExpr, Column, Function, Literal, NullParser, NumberParser, ParamParser, StringParser}, ParseError, QueryParser};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ScalarExpr {
    Literal(Literal),
    Column(Column),
    Parameter(String),
    Function(Function),
    Case(CaseExpr),
    /// Only valid as a function argument, `count(*)`.
    WildCard,
}

impl ScalarExpr {
    pub fn column(alias: &str, field: &str) -> Self {
        ScalarExpr::Column(Column::path(alias, field))
    }

    pub fn name(name: &str) -> Self {
        ScalarExpr::Column(Column::name(name))
    }

    pub fn parameter(name: &str) -> Self {
        ScalarExpr::Parameter(name.to_string())
    }

    pub fn parse(parser: &mut QueryParser, allow_wildcard: bool) -> Result<ScalarExpr, ParseError> {
        parser.next_non_whitespace();

        if parser.eof() {
            return ParseError::new("Invalid scalar value", parser.position, parser).err();
        }

        if NumberParser::is_number(parser) {
            return NumberParser::parse(parser)
                .map(ScalarExpr::Literal);
        }
        if StringParser::is_string_delimiter(parser) {
            return StringParser::parse(parser)
                .map(ScalarExpr::Literal);
        }
        if ParamParser::is_param(parser) {
            return ParamParser::parse(parser);
        }
        if CaseExpr::is_case(parser) {
            return CaseExpr::parse(parser)
                .map(ScalarExpr::Case);
        }
        if BoolParser::is_bool(parser) {
            return BoolParser::parse(parser)
                .map(ScalarExpr::Literal);
        }
        if NullParser::is_null(parser) {
            return NullParser::parse(parser)
                .map(ScalarExpr::Literal);
        }

        if parser.current() == '*' {
            if !allow_wildcard {
                return ParseError::new("Invalid scalar", parser.position, parser).err();
            }
            parser.next();
            return Ok(ScalarExpr::WildCard);
        }

        Self::parse_column_or_function(parser)
    }

    fn parse_column_or_function(parser: &mut QueryParser) -> Result<ScalarExpr, ParseError> {
        let pivot = parser.position;
        let column = Column::parse(parser)?;

        if !ArgsParser::is_args_start(parser) {
            return Ok(ScalarExpr::Column(column));
        }

        let name = match column {
            Column::Name { name } => name,
            Column::Path { .. } => return ParseError::new("Invalid function", pivot, parser).err(),
        };
        let args = ArgsParser::parse_function_args(parser)?;

        Ok(ScalarExpr::Function(Function { name, args: args.args, distinct: args.distinct }))
    }
}

impl fmt::Display for ScalarExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarExpr::Literal(l) => write!(f, "{}", l),
            ScalarExpr::Column(c) => write!(f, "{}", c),
            ScalarExpr::Parameter(name) => write!(f, ":{}", name),
            ScalarExpr::Function(fun) => write!(f, "{}", fun),
            ScalarExpr::Case(case) => write!(f, "{}", case),
            ScalarExpr::WildCard => write!(f, "*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{Column, Function, Literal, ScalarExpr}, QueryParser};

    #[test]
    pub fn test_scalar_column_name() {
        let mut parser = QueryParser::new("  column");

        let result = ScalarExpr::parse(&mut parser, false).expect("Failed to parse scalar");

        assert_eq!(result, ScalarExpr::Column(Column::name("column")));
    }

    #[test]
    pub fn test_scalar_column_path() {
        let mut parser = QueryParser::new("o.dateCreated");

        let result = ScalarExpr::parse(&mut parser, false).expect("Failed to parse scalar");

        assert_eq!(result, ScalarExpr::column("o", "dateCreated"));
    }

    #[test]
    pub fn test_scalar_function() {
        let mut parser = QueryParser::new("count(o.id) as counter");

        let result = ScalarExpr::parse(&mut parser, false).expect("Failed to parse scalar");

        assert_eq!(result, ScalarExpr::Function(Function {
            name: "count".into(),
            args: vec![ScalarExpr::column("o", "id")],
            distinct: false,
        }));
        assert_eq!(parser.current(), ' ');
    }

    #[test]
    pub fn test_scalar_count_wildcard() {
        let mut parser = QueryParser::new("COUNT(*)");

        let result = ScalarExpr::parse(&mut parser, false).expect("Failed to parse scalar");

        assert_eq!(result.to_string(), "COUNT(*)");
    }

    #[test]
    pub fn test_scalar_parameter() {
        let mut parser = QueryParser::new(":foo");

        let result = ScalarExpr::parse(&mut parser, false).expect("Failed to parse scalar");

        assert_eq!(result, ScalarExpr::parameter("foo"));
    }

    #[test]
    pub fn test_scalar_literals() {
        let cases = [
            ("null", Literal::Null),
            ("true", Literal::Bool(true)),
            ("32", Literal::Int(32)),
            ("'identifier'", Literal::String("identifier".into())),
        ];

        for (text, expected) in cases {
            let mut parser = QueryParser::new(text);
            let result = ScalarExpr::parse(&mut parser, false).expect("Failed to parse scalar");
            assert_eq!(result, ScalarExpr::Literal(expected), "{}", text);
        }
    }

    #[test]
    pub fn test_scalar_empty() {
        let mut parser = QueryParser::new(" ");

        let result = ScalarExpr::parse(&mut parser, true);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.text, "");
                assert_eq!(err.start, 1);
                assert_eq!(err.end, 1);
            },
        }
    }

    #[test]
    pub fn test_scalar_wildcard_not_allowed() {
        let mut parser = QueryParser::new("*");

        let result = ScalarExpr::parse(&mut parser, false);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.text, "*");
                assert_eq!(err.start, 0);
                assert_eq!(err.end, 0);
            },
        }
    }

    #[test]
    pub fn test_scalar_method_call_rejected() {
        let mut parser = QueryParser::new("o.size()");

        assert!(ScalarExpr::parse(&mut parser, false).is_err());
    }
}
