//! Content digests appended to rewritten URLs.

use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;

/// Produces a stable fingerprint for a file's bytes.
///
/// Identical bytes must always yield the same digest.
pub trait ContentHasher {
  /// Digest the provided file contents.
  fn digest(&self, contents: &[u8]) -> String;
}

/// Textual form of an MD5 digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DigestEncoding {
  /// Lowercase hexadecimal, 32 characters.
  #[default]
  Hex,
  /// URL-safe base64 without padding, 22 characters.
  Base64url,
}

/// MD5 content hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher {
  encoding: DigestEncoding,
}

impl Md5Hasher {
  /// Create a hasher emitting digests in the given encoding.
  pub fn new(encoding: DigestEncoding) -> Self {
    Self { encoding }
  }
}

impl ContentHasher for Md5Hasher {
  fn digest(&self, contents: &[u8]) -> String {
    let digest = md5::compute(contents);
    match self.encoding {
      DigestEncoding::Hex => format!("{digest:x}"),
      DigestEncoding::Base64url => general_purpose::URL_SAFE_NO_PAD.encode(digest.0),
    }
  }
}

impl<H: ContentHasher + ?Sized> ContentHasher for &H {
  fn digest(&self, contents: &[u8]) -> String {
    (**self).digest(contents)
  }
}


/// Test hasher whose digest is the file's own trimmed text, so fixtures control digests.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct EchoHasher;

#[cfg(test)]
impl ContentHasher for EchoHasher {
  fn digest(&self, contents: &[u8]) -> String {
    String::from_utf8_lossy(contents).trim().to_string()
  }
}
