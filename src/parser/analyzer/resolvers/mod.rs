pub mod column_resolver;
pub use column_resolver::*;

pub mod scalar_resolver;
pub use scalar_resolver::*;

pub mod predicate_resolver;
pub use predicate_resolver::*;

pub mod join_resolver;
pub use join_resolver::*;
