//! Data structures accumulated while hashing an asset tree.

use std::collections::BTreeSet;

/// Root-relative paths of every asset pack processed in the current run.
///
/// Insertion order is preserved and duplicates are ignored. The text post-processing pass
/// rewrites literal occurrences of these paths.
#[derive(Debug, Clone, Default)]
pub struct UrlRegistry {
  urls: Vec<String>,
  seen: BTreeSet<String>,
}

impl UrlRegistry {
  /// Record a URL, returning `false` when it was already present.
  pub fn register(&mut self, url: impl Into<String>) -> bool {
    let url = url.into();
    if self.seen.insert(url.clone()) {
      self.urls.push(url);
      true
    } else {
      false
    }
  }

  /// Registered URLs in discovery order.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.urls.iter().map(String::as_str)
  }

  /// Number of registered URLs.
  pub fn len(&self) -> usize {
    self.urls.len()
  }

  /// Whether nothing has been registered yet.
  pub fn is_empty(&self) -> bool {
    self.urls.is_empty()
  }
}

/// Counts of files rewritten during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
  /// Asset packs serialized back to disk.
  pub manifests_written: usize,
  /// Multiatlas and spine atlas side-files rewritten.
  pub atlases_written: usize,
  /// Text files whose content changed in the post-processing pass.
  pub text_files_written: usize,
}
