use crate::parser::QueryParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq
}

use std::fmt;

impl fmt::Display for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparatorOp::Eq => write!(f, "="),
            ComparatorOp::NotEq => write!(f, "<>"),
            ComparatorOp::Lt => write!(f, "<"),
            ComparatorOp::LtEq => write!(f, "<="),
            ComparatorOp::Gt => write!(f, ">"),
            ComparatorOp::GtEq => write!(f, ">="),
        }
    }
}

impl ComparatorOp {
    /// Consumes a comparison operator at the cursor. Two-character operators
    /// are tried first so `<=` is never read as `<`.
    pub fn check(parser: &mut QueryParser) -> Option<ComparatorOp> {
        if parser.consume(|c| &c.less_than_or_equal) {
            return Some(ComparatorOp::LtEq);
        }

        if parser.consume(|c| &c.greater_than_or_equal) {
            return Some(ComparatorOp::GtEq);
        }

        if parser.consume(|c| &c.not_equal_b) || parser.consume(|c| &c.not_equal_c) {
            return Some(ComparatorOp::NotEq);
        }

        if parser.consume(|c| &c.less_than) {
            return Some(ComparatorOp::Lt);
        }

        if parser.consume(|c| &c.greater_than) {
            return Some(ComparatorOp::Gt);
        }

        if parser.consume(|c| &c.equal) {
            return Some(ComparatorOp::Eq);
        }

        None
    }
}
