//! In-memory [`AssetFs`] used by tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use super::{AssetFs, DirEntry};

/// Flat map of file paths to contents. Directories are implied by file paths.
#[derive(Debug, Default)]
pub(crate) struct MemoryFs {
  files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
  writes: RefCell<Vec<PathBuf>>,
}

impl MemoryFs {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn with_file(self, path: impl Into<PathBuf>, contents: impl AsRef<[u8]>) -> Self {
    self
      .files
      .borrow_mut()
      .insert(path.into(), contents.as_ref().to_vec());
    self
  }

  pub(crate) fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
    self
      .files
      .borrow()
      .get(path.as_ref())
      .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
  }

  pub(crate) fn bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
    self.files.borrow().get(path.as_ref()).cloned()
  }

  /// Paths passed to [`AssetFs::write`], in call order.
  pub(crate) fn writes(&self) -> Vec<PathBuf> {
    self.writes.borrow().clone()
  }

  fn is_dir(&self, path: &Path) -> bool {
    self
      .files
      .borrow()
      .keys()
      .any(|file| file != path && file.starts_with(path))
  }
}

impl AssetFs for MemoryFs {
  fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
    if !self.is_dir(dir) {
      return Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such directory {}", dir.display()),
      ));
    }

    let files = self.files.borrow();
    let mut children = BTreeSet::new();
    for path in files.keys() {
      let Ok(rest) = path.strip_prefix(dir) else {
        continue;
      };
      let mut components = rest.components();
      let Some(first) = components.next() else {
        continue;
      };
      let is_dir = components.next().is_some();
      children.insert((dir.join(first), is_dir));
    }

    Ok(
      children
        .into_iter()
        .map(|(path, is_dir)| DirEntry { path, is_dir })
        .collect(),
    )
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    self.files.borrow().get(path).cloned().ok_or_else(|| {
      io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file {}", path.display()),
      )
    })
  }

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
    self.writes.borrow_mut().push(path.to_path_buf());
    self
      .files
      .borrow_mut()
      .insert(path.to_path_buf(), contents.to_vec());
    Ok(())
  }

  fn is_file(&self, path: &Path) -> bool {
    self.files.borrow().contains_key(path)
  }
}
