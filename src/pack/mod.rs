//! Asset pack interpretation: classification, entry URL fields, atlas side-files and text
//! substitution.

mod atlas;
mod classify;
pub(crate) mod context;
mod fields;
mod sections;
mod text;

pub use classify::{Classification, classify_manifest};
pub use fields::{AtlasKind, URL_FIELDS, UrlField, rewrite_entry_urls};
pub use sections::META_SECTION;
pub use text::substitute_urls;

pub(crate) use sections::rewrite_sections;
