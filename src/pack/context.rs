use std::path::Path;

use crate::asset_paths::{resolve_path, root_relative_url, with_hash_suffix};
use crate::error::{HashError, HashResult};
use crate::hashing::ContentHasher;
use crate::storage::AssetFs;

/// Borrowed view of the root, filesystem and hasher shared by every rewrite step.
pub(crate) struct AssetContext<'a, F, H> {
  pub root: &'a Path,
  pub fs: &'a F,
  pub hasher: &'a H,
}

impl<F: AssetFs, H: ContentHasher> AssetContext<'_, F, H> {
  /// Digest the file at an absolute path, failing loudly when it does not exist.
  pub fn digest_file(&self, path: &Path) -> HashResult<String> {
    if !self.fs.is_file(path) {
      return Err(HashError::missing(path));
    }

    let contents = self.fs.read(path).map_err(|err| HashError::io(path, err))?;
    Ok(self.hasher.digest(&contents))
  }

  /// Digest the file a root-relative URL points at.
  pub fn digest_url(&self, url: &str) -> HashResult<String> {
    self.digest_file(&resolve_path(self.root, url))
  }

  /// Build the hashed form of a root-relative URL.
  pub fn hashed_url(&self, url: &str) -> HashResult<String> {
    let digest = self.digest_url(url)?;
    Ok(with_hash_suffix(url, &digest))
  }

  pub fn read(&self, path: &Path) -> HashResult<Vec<u8>> {
    self.fs.read(path).map_err(|err| HashError::io(path, err))
  }

  pub fn write(&self, path: &Path, contents: &[u8]) -> HashResult<()> {
    self.fs.write(path, contents).map_err(|err| HashError::io(path, err))
  }

  /// Root-relative, forward-slash form of `path` for log output and the registry.
  pub fn display(&self, path: &Path) -> String {
    root_relative_url(self.root, path)
  }
}
