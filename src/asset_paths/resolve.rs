use std::path::{Component, Path, PathBuf};

/// Join `relative` onto `base` and lexically collapse `.` and `..` segments.
///
/// Nothing is looked up on disk, so symlinks are not followed. A `..` that would climb above
/// the filesystem root is dropped. The result is used as the identity of side-files in the
/// visited set, so `atlas/./hero.json` and `atlas/hero.json` resolve to the same key.
pub fn resolve_path(base: &Path, relative: &str) -> PathBuf {
  let joined = base.join(relative);
  let mut resolved = PathBuf::new();

  for component in joined.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        let at_root = matches!(
          resolved.components().next_back(),
          None | Some(Component::RootDir | Component::Prefix(_))
        );
        if !at_root {
          resolved.pop();
        }
      }
      other => resolved.push(other.as_os_str()),
    }
  }

  resolved
}

/// Express `path` relative to `root` using forward slashes.
///
/// Paths outside of `root` are returned unchanged apart from separator normalisation.
pub fn root_relative_url(root: &Path, path: &Path) -> String {
  let relative = path.strip_prefix(root).unwrap_or(path);
  relative.to_string_lossy().replace('\\', "/")
}
