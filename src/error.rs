//! Error types raised while rewriting asset packs.

use std::path::{Path, PathBuf};

/// Result alias used throughout the crate.
pub type HashResult<T> = Result<T, HashError>;

/// Fatal failures that abort a hashing run.
///
/// Candidate manifests that fail to parse are not represented here: they are
/// reported as [`crate::pack::Classification::NotApplicable`] and skipped.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
  /// A URL or atlas image points at a file that does not exist.
  #[error("file not found '{}'", .path.display())]
  MissingAsset {
    /// Absolute path that was expected to exist.
    path: PathBuf,
  },

  /// Listing, reading or writing a path failed.
  #[error("i/o error on '{}': {source}", .path.display())]
  Io {
    /// Path the operation was applied to.
    path: PathBuf,
    /// Underlying error.
    #[source]
    source: std::io::Error,
  },

  /// A multiatlas side-file does not have the expected shape.
  #[error("malformed atlas '{}': {reason}", .path.display())]
  MalformedAtlas {
    /// Atlas file being rewritten.
    path: PathBuf,
    /// What was wrong with it.
    reason: String,
  },

  /// A rewritten document could not be serialized back to JSON.
  #[error("failed to serialize '{}': {source}", .path.display())]
  Serialize {
    /// Destination file of the document.
    path: PathBuf,
    /// Underlying error.
    #[source]
    source: serde_json::Error,
  },
}

impl HashError {
  pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
    Self::Io {
      path: path.to_path_buf(),
      source,
    }
  }

  pub(crate) fn missing(path: &Path) -> Self {
    Self::MissingAsset {
      path: path.to_path_buf(),
    }
  }

  pub(crate) fn malformed_atlas(path: &Path, reason: impl Into<String>) -> Self {
    Self::MalformedAtlas {
      path: path.to_path_buf(),
      reason: reason.into(),
    }
  }

  /// Whether this error was caused by a missing asset rather than a broken filesystem.
  pub fn is_missing_asset(&self) -> bool {
    matches!(self, Self::MissingAsset { .. })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_asset_message_names_the_path() {
    let err = HashError::missing(Path::new("/game/missing.png"));
    assert_eq!(err.to_string(), "file not found '/game/missing.png'");
    assert!(err.is_missing_asset());
  }

  #[test]
  fn io_errors_are_not_missing_assets() {
    let err = HashError::io(
      Path::new("/game"),
      std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(!err.is_missing_asset());
    assert!(err.to_string().contains("/game"));
  }
}
