use std::path::{Path, PathBuf};

use super::{AssetFs, DirEntry};
use crate::error::{HashError, HashResult};

/// Lazily enumerate every file below `root` in pre-order.
///
/// Children are visited in the order [`AssetFs::list_dir`] returns them and a directory's
/// subtree is exhausted before its next sibling. Each call starts a fresh walk.
pub fn walk_files<'a, F: AssetFs>(fs: &'a F, root: &Path) -> WalkFiles<'a, F> {
  WalkFiles {
    fs,
    pending: vec![DirEntry {
      path: root.to_path_buf(),
      is_dir: true,
    }],
  }
}

/// Iterator returned by [`walk_files`].
pub struct WalkFiles<'a, F> {
  fs: &'a F,
  pending: Vec<DirEntry>,
}

impl<F: AssetFs> Iterator for WalkFiles<'_, F> {
  type Item = HashResult<PathBuf>;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some(entry) = self.pending.pop() {
      if !entry.is_dir {
        return Some(Ok(entry.path));
      }

      match self.fs.list_dir(&entry.path) {
        Ok(children) => self.pending.extend(children.into_iter().rev()),
        Err(err) => {
          self.pending.clear();
          return Some(Err(HashError::io(&entry.path, err)));
        }
      }
    }

    None
  }
}
