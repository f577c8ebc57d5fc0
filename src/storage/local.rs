use std::fs;
use std::io;
use std::path::Path;

use super::{AssetFs, DirEntry};

/// [`AssetFs`] backed by the real filesystem.
///
/// Directory listings are sorted by file name so repeated runs visit files in the same order
/// regardless of the platform's native enumeration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl AssetFs for LocalFs {
  fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
      let entry = entry?;
      // Follow symlinks the way a stat-based walk would.
      let is_dir = fs::metadata(entry.path())?.is_dir();
      children.push((entry.file_name(), DirEntry {
        path: entry.path(),
        is_dir,
      }));
    }

    children.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(children.into_iter().map(|(_, entry)| entry).collect())
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
  }

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)
  }

  fn is_file(&self, path: &Path) -> bool {
    path.is_file()
  }
}
