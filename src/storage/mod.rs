//! Filesystem access used by the hashing engine.
//!
//! All reads, writes and directory listings go through [`AssetFs`] so that the traversal and
//! rewriting logic can run against the real disk ([`LocalFs`]) or an in-memory tree in tests.

mod local;
#[cfg(test)]
pub(crate) mod memory;
mod walk;

use std::io;
use std::path::{Path, PathBuf};

pub use local::LocalFs;
pub use walk::{WalkFiles, walk_files};

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
  /// Full path of the child.
  pub path: PathBuf,
  /// Whether the child is a directory that should be descended into.
  pub is_dir: bool,
}

/// Minimal filesystem surface required to hash an asset tree.
pub trait AssetFs {
  /// List the direct children of `dir` in a stable order.
  fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

  /// Read the full contents of a file.
  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

  /// Replace the contents of a file.
  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

  /// Whether `path` names an existing regular file.
  fn is_file(&self, path: &Path) -> bool;
}

impl<F: AssetFs + ?Sized> AssetFs for &F {
  fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
    (**self).list_dir(dir)
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    (**self).read(path)
  }

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
    (**self).write(path, contents)
  }

  fn is_file(&self, path: &Path) -> bool {
    (**self).is_file(path)
  }
}
