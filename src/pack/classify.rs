use serde_json::{Map, Value};

/// Outcome of inspecting a candidate manifest file.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
  /// The file is an asset pack; carries its top-level object.
  Applicable(Map<String, Value>),
  /// The file is valid JSON but not an asset pack.
  NotApplicable,
  /// The file is not valid JSON. Treated exactly like [`Classification::NotApplicable`].
  Unparseable,
}

/// Decide whether `contents` is an asset pack with the given `meta.contentType`.
pub fn classify_manifest(contents: &[u8], content_type: &str) -> Classification {
  let Ok(value) = serde_json::from_slice::<Value>(contents) else {
    return Classification::Unparseable;
  };

  let Value::Object(pack) = value else {
    return Classification::NotApplicable;
  };

  let declared = pack
    .get("meta")
    .and_then(|meta| meta.get("contentType"))
    .and_then(Value::as_str);

  if declared == Some(content_type) {
    Classification::Applicable(pack)
  } else {
    Classification::NotApplicable
  }
}
