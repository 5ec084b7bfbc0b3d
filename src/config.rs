//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive catalog
//! runs and helpers to load configuration from disk (and to restore the
//! default document on reset).

mod load;
mod schema;

pub use load::{resolve_config_path, write_default_config};
pub use schema::*;
