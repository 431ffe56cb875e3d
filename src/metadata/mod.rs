pub mod metadata_error;
pub use metadata_error::*;

pub mod config;
pub use config::*;

pub mod resource_metadata;
pub use resource_metadata::*;

pub mod metadata_provider;
pub use metadata_provider::*;
