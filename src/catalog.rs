//! Catalog generation: walk the library root, fingerprint every audio
//! file, and persist the relative-path → content-hash mapping.
//!
//! Catalog format v1: flat JSON object, `/` as the path separator on
//! every platform, lowercase-hex SHA-256 digests.

mod generate;
mod hash;
mod model;

pub(crate) use generate::is_audio_file;
pub use generate::{generate, resolve_root};
pub use hash::hash_file;
pub use model::Catalog;
