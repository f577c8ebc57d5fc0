use crate::asset_paths::with_hash_suffix;

/// Replace every literal occurrence of each URL with its hashed form.
///
/// `hashes` pairs an unhashed URL with the digest of the file it names. Replacement is plain
/// substring matching, applied URL by URL in order, so a URL embedded in a longer token is
/// rewritten as well.
pub fn substitute_urls(content: &str, hashes: &[(String, String)]) -> String {
  hashes
    .iter()
    .fold(content.to_string(), |text, (url, digest)| {
      if url.is_empty() {
        return text;
      }
      text.replace(url.as_str(), &with_hash_suffix(url, digest))
    })
}

#[cfg(test)]
mod tests {
  use super::substitute_urls;

  fn hashes(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
      .iter()
      .map(|(url, digest)| (url.to_string(), digest.to_string()))
      .collect()
  }

  #[test]
  fn replaces_every_occurrence() {
    let source = r#"this.load.pack("pack", "assets/pack.json"); // assets/pack.json"#;
    let output = substitute_urls(source, &hashes(&[("assets/pack.json", "abc")]));
    assert_eq!(
      output,
      r#"this.load.pack("pack", "assets/pack.json?h=abc"); // assets/pack.json?h=abc"#
    );
  }

  #[test]
  fn leaves_unrelated_text_alone() {
    let source = "const x = 1;";
    assert_eq!(substitute_urls(source, &hashes(&[("pack.json", "abc")])), source);
  }

  #[test]
  fn matches_inside_longer_tokens() {
    let source = r#"load("other-pack.json")"#;
    let output = substitute_urls(source, &hashes(&[("pack.json", "abc")]));
    assert_eq!(output, r#"load("other-pack.json?h=abc")"#);
  }

  #[test]
  fn empty_url_is_ignored() {
    assert_eq!(substitute_urls("abc", &hashes(&[("", "x")])), "abc");
  }
}
