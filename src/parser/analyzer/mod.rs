pub mod analyzer_error;
pub use analyzer_error::*;

pub mod analysis_context;
pub use analysis_context::*;

pub mod references;
pub use references::*;

pub mod resolvers;
pub use resolvers::*;
