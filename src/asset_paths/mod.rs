//! Helpers for resolving asset URLs against the root and building their hashed form.
//!
//! URLs found in manifests are plain relative paths. They are joined onto the root without any
//! URL decoding, and the digest is appended as a query suffix.

mod resolve;
mod suffix;

pub use resolve::{resolve_path, root_relative_url};
pub use suffix::{HASH_QUERY_PARAM, with_hash_suffix};
