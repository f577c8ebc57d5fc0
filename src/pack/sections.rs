use std::collections::BTreeSet;
use std::path::PathBuf;

use serde_json::{Map, Value};

use super::atlas::{rewrite_multiatlas, rewrite_spine_atlas};
use super::context::AssetContext;
use super::fields::{AtlasKind, rewrite_entry_urls};
use crate::error::HashResult;
use crate::hashing::ContentHasher;
use crate::storage::AssetFs;

/// Key of the pack section holding metadata rather than asset entries.
pub const META_SECTION: &str = "meta";

/// Rewrite every entry of every asset section in `pack`.
///
/// Atlas side-files are dereferenced before the entry's own URL fields are hashed, so they are
/// located through the original `url`. Returns the number of side-files written.
pub(crate) fn rewrite_sections<F: AssetFs, H: ContentHasher>(
  ctx: &AssetContext<'_, F, H>,
  visited: &mut BTreeSet<PathBuf>,
  pack: &mut Map<String, Value>,
) -> HashResult<usize> {
  let mut atlases_written = 0;

  for (section_key, section) in pack.iter_mut() {
    if section_key == META_SECTION {
      continue;
    }

    let Some(files) = section.get_mut("files").and_then(Value::as_array_mut) else {
      continue;
    };

    for entry in files.iter_mut().filter_map(Value::as_object_mut) {
      if dereference_atlas(ctx, visited, entry)? {
        atlases_written += 1;
      }
      rewrite_entry_urls(entry, |url| ctx.hashed_url(url))?;
    }
  }

  Ok(atlases_written)
}

fn dereference_atlas<F: AssetFs, H: ContentHasher>(
  ctx: &AssetContext<'_, F, H>,
  visited: &mut BTreeSet<PathBuf>,
  entry: &Map<String, Value>,
) -> HashResult<bool> {
  let Some(kind) = AtlasKind::from_entry(entry) else {
    return Ok(false);
  };
  let Some(url) = entry.get("url").and_then(Value::as_str) else {
    return Ok(false);
  };

  match kind {
    AtlasKind::MultiAtlas => {
      let image_dir = entry.get("path").and_then(Value::as_str).unwrap_or("");
      rewrite_multiatlas(ctx, visited, image_dir, url)
    }
    AtlasKind::SpineAtlas => rewrite_spine_atlas(ctx, visited, url),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hashing::EchoHasher;
  use crate::storage::memory::MemoryFs;
  use serde_json::json;
  use std::path::Path;

  fn context<'a>(fs: &'a MemoryFs) -> AssetContext<'a, MemoryFs, EchoHasher> {
    AssetContext {
      root: Path::new("/game"),
      fs,
      hasher: &EchoHasher,
    }
  }

  fn object(value: Value) -> Map<String, Value> {
    match value {
      Value::Object(map) => map,
      _ => panic!("expected object"),
    }
  }

  #[test]
  fn multiatlas_is_located_through_unhashed_url() {
    let fs = MemoryFs::new()
      .with_file("/game/atlas/hero.json", r#"{"textures":[{"image":"hero.png"}]}"#)
      .with_file("/game/atlas/hero.png", "img");
    let mut visited = BTreeSet::new();
    let mut pack = object(json!({
      "meta": {"contentType": "x"},
      "sprites": {"files": [
        {"key": "hero", "type": "multiatlas", "url": "atlas/hero.json", "path": "atlas"}
      ]}
    }));

    let written = rewrite_sections(&context(&fs), &mut visited, &mut pack).unwrap();

    assert_eq!(written, 1);
    assert_eq!(
      pack["sprites"]["files"][0]["url"],
      format!(
        "atlas/hero.json?h={}",
        r#"{"textures":[{"image":"hero.png?h=img"}]}"#
      )
    );
  }

  #[test]
  fn meta_and_sections_without_files_are_skipped() {
    let fs = MemoryFs::new();
    let mut visited = BTreeSet::new();
    let mut pack = object(json!({
      "meta": {"url": "not-an-asset.png", "files": [{"url": "nope.png"}]},
      "empty": {},
      "odd": "value",
      "mixed": {"files": ["string entry", 3]}
    }));
    let before = pack.clone();

    let written = rewrite_sections(&context(&fs), &mut visited, &mut pack).unwrap();

    assert_eq!(written, 0);
    assert_eq!(pack, before);
  }

  #[test]
  fn atlas_entry_without_url_is_not_dereferenced() {
    let fs = MemoryFs::new().with_file("/game/atlas.png", "img");
    let mut visited = BTreeSet::new();
    let mut pack = object(json!({
      "sheets": {"files": [{"type": "spineAtlas", "textureURL": "atlas.png"}]}
    }));

    let written = rewrite_sections(&context(&fs), &mut visited, &mut pack).unwrap();

    assert_eq!(written, 0);
    assert!(visited.is_empty());
    assert_eq!(pack["sheets"]["files"][0]["textureURL"], "atlas.png?h=img");
  }
}
