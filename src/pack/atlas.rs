//! Rewriting of composite atlas side-files referenced from pack entries.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::bytes::Regex;
use serde_json::Value;
use tracing::{debug, info};

use super::context::AssetContext;
use crate::asset_paths::{resolve_path, with_hash_suffix};
use crate::error::{HashError, HashResult};
use crate::hashing::ContentHasher;
use crate::storage::AssetFs;

fn line_break() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"\r\n|\r|\n").expect("invalid line break regex"))
}

fn read_side_file<F: AssetFs, H: ContentHasher>(
  ctx: &AssetContext<'_, F, H>,
  atlas_file: &Path,
) -> HashResult<Vec<u8>> {
  if !ctx.fs.is_file(atlas_file) {
    return Err(HashError::missing(atlas_file));
  }
  ctx.read(atlas_file)
}

/// Hash every texture image listed by the multiatlas JSON at `url`.
///
/// Images are resolved against `image_dir`, itself relative to the root. Returns `false` without
/// touching the file when it was already rewritten earlier in the run.
pub(crate) fn rewrite_multiatlas<F: AssetFs, H: ContentHasher>(
  ctx: &AssetContext<'_, F, H>,
  visited: &mut BTreeSet<PathBuf>,
  image_dir: &str,
  url: &str,
) -> HashResult<bool> {
  let atlas_file = resolve_path(ctx.root, url);
  if !visited.insert(atlas_file.clone()) {
    debug!(atlas = %ctx.display(&atlas_file), "multiatlas already rewritten");
    return Ok(false);
  }

  let contents = read_side_file(ctx, &atlas_file)?;
  let mut atlas: Value = serde_json::from_slice(&contents)
    .map_err(|err| HashError::malformed_atlas(&atlas_file, err.to_string()))?;

  let textures = atlas
    .get_mut("textures")
    .and_then(Value::as_array_mut)
    .ok_or_else(|| HashError::malformed_atlas(&atlas_file, "missing `textures` array"))?;

  let base = ctx.root.join(image_dir);
  for texture in textures.iter_mut() {
    let Some(Value::String(image)) = texture.get_mut("image") else {
      return Err(HashError::malformed_atlas(
        &atlas_file,
        "texture without an `image` name",
      ));
    };

    let digest = ctx.digest_file(&resolve_path(&base, image))?;
    *image = with_hash_suffix(image, &digest);
  }

  let output = serde_json::to_vec(&atlas).map_err(|source| HashError::Serialize {
    path: atlas_file.clone(),
    source,
  })?;

  info!("  * Writing MultiAtlas '{}'", ctx.display(&atlas_file));
  ctx.write(&atlas_file, &output)?;
  Ok(true)
}

/// Hash the page image named on the first line of the spine atlas at `url`.
///
/// The image is resolved next to the atlas file. Every other line is kept byte for byte, but
/// all line endings are normalised to `\n`.
pub(crate) fn rewrite_spine_atlas<F: AssetFs, H: ContentHasher>(
  ctx: &AssetContext<'_, F, H>,
  visited: &mut BTreeSet<PathBuf>,
  url: &str,
) -> HashResult<bool> {
  let atlas_file = resolve_path(ctx.root, url);
  if !visited.insert(atlas_file.clone()) {
    debug!(atlas = %ctx.display(&atlas_file), "spine atlas already rewritten");
    return Ok(false);
  }

  let contents = read_side_file(ctx, &atlas_file)?;
  let mut lines = line_break().split(&contents);
  let first_line = lines.next().unwrap_or_default();
  let image_name = std::str::from_utf8(first_line).map_err(|_| {
    HashError::malformed_atlas(&atlas_file, "page image name is not valid UTF-8")
  })?;

  let atlas_dir = atlas_file.parent().unwrap_or(Path::new(""));
  let digest = ctx.digest_file(&resolve_path(atlas_dir, image_name))?;

  let mut output = with_hash_suffix(image_name, &digest).into_bytes();
  for line in lines {
    output.push(b'\n');
    output.extend_from_slice(line);
  }

  info!("  * Writing SpineAtlas '{}'", ctx.display(&atlas_file));
  ctx.write(&atlas_file, &output)?;
  Ok(true)
}
