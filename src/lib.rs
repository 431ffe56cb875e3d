pub mod parser;
pub use parser::{ParseError, QueryTree};

pub mod naming;
pub use naming::{AliasGenerator, QueryNameGenerator};

pub mod metadata;
pub use metadata::{EagerLoadingConfig, MetadataError, ResourceEagerConfig, ResourceMetadata, ResourceMetadataProvider, ResourceMetadataRegistry};

pub mod rewriter;
pub use rewriter::{EagerJoinRewriter, RewriteError};
