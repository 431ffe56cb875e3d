pub mod rewrite_error;
pub use rewrite_error::*;

pub mod join_retention;
pub use join_retention::*;

pub mod subquery_builder;
pub use subquery_builder::*;

pub mod eager_join_rewriter;
pub use eager_join_rewriter::*;
