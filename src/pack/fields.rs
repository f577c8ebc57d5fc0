use serde_json::{Map, Value};
use tracing::debug;

use crate::error::HashResult;

/// A URL-bearing key of an asset pack entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlField {
  /// Key name inside the entry object.
  pub name: &'static str,
  /// Whether the field conventionally holds a list of URLs rather than a single one.
  ///
  /// Both shapes are rewritten regardless; this only affects diagnostics.
  pub multi_valued: bool,
}

impl UrlField {
  const fn single(name: &'static str) -> Self {
    Self {
      name,
      multi_valued: false,
    }
  }

  const fn multi(name: &'static str) -> Self {
    Self {
      name,
      multi_valued: true,
    }
  }
}

/// Every entry key whose value is rewritten, in processing order.
pub const URL_FIELDS: &[UrlField] = &[
  UrlField::single("url"),
  UrlField::multi("urls"),
  UrlField::single("atlasURL"),
  UrlField::single("textureURL"),
  UrlField::single("fontDataURL"),
  UrlField::single("jsonURL"),
  UrlField::single("audioURL"),
  UrlField::single("objURL"),
  UrlField::single("matURL"),
];

/// Composite atlas formats whose `url` points at a side-file with its own image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtlasKind {
  /// JSON index listing several texture images under `textures[].image`.
  MultiAtlas,
  /// Spine text atlas whose first line names the page image.
  SpineAtlas,
}

impl AtlasKind {
  /// Map an entry's `type` discriminator to an atlas format.
  pub fn from_entry(entry: &Map<String, Value>) -> Option<Self> {
    match entry.get("type").and_then(Value::as_str)? {
      "multiatlas" => Some(Self::MultiAtlas),
      "spineAtlas" => Some(Self::SpineAtlas),
      _ => None,
    }
  }
}

/// Rewrite every URL field present on `entry` through `convert`.
///
/// A string value is replaced by the converted string and a list is converted element by
/// element, keeping its length and order. Absent fields, and values of any other shape, are
/// left untouched. A list containing a non-string element is left untouched as a whole.
pub fn rewrite_entry_urls<C>(entry: &mut Map<String, Value>, mut convert: C) -> HashResult<()>
where
  C: FnMut(&str) -> HashResult<String>,
{
  for field in URL_FIELDS {
    let Some(value) = entry.get_mut(field.name) else {
      continue;
    };

    match value {
      Value::String(url) => {
        if field.multi_valued {
          debug!(field = field.name, "single URL in list field");
        }
        *url = convert(url.as_str())?;
      }
      Value::Array(items) if items.iter().all(Value::is_string) => {
        if !field.multi_valued {
          debug!(field = field.name, "URL list in single-value field");
        }
        for item in items.iter_mut() {
          if let Value::String(url) = item {
            *url = convert(url.as_str())?;
          }
        }
      }
      _ => {}
    }
  }

  Ok(())
}
