pub mod query;
pub use query::*;

pub mod select_item;
pub use select_item::*;

pub mod projection_parser;
pub use projection_parser::*;

pub mod from_clause;
pub use from_clause::*;

pub mod join;
pub use join::*;

pub mod where_parser;
pub use where_parser::*;

pub mod group_by;
pub use group_by::*;

pub mod having_parser;
pub use having_parser::*;

pub mod order_by;
pub use order_by::*;

pub mod predicate;
pub use predicate::*;

pub mod scalar_expr;
pub use scalar_expr::*;

pub mod case_expr;
pub use case_expr::*;

pub mod column;
pub use column::*;

pub mod function;
pub use function::*;

pub mod args_parser;
pub use args_parser::*;

pub mod operators;
pub use operators::*;

pub mod text_collector;
pub use text_collector::*;

pub mod literals;
pub use literals::*;
