//! Run configuration loaded from the asset root.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::hashing::DigestEncoding;

/// File name looked up in the root directory when no explicit config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "asset-hash.config.json";

/// `meta.contentType` value that marks a JSON file as an asset pack.
pub const ASSET_PACK_CONTENT_TYPE: &str = "phasereditor2d.pack.core.AssetContentType";

/// Discoverable settings controlling which files are treated as packs and text sources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    /// Extension (without the dot) of files that are candidate asset packs.
    pub manifest_extension: String,
    /// Required value of `meta.contentType` for a candidate to be processed.
    pub content_type: String,
    /// Extensions of text files rewritten by the optional post-processing pass.
    pub text_extensions: Vec<String>,
    /// Textual form of the content digest.
    pub digest_encoding: DigestEncoding,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            manifest_extension: "json".into(),
            content_type: ASSET_PACK_CONTENT_TYPE.into(),
            text_extensions: vec!["js".into()],
            digest_encoding: DigestEncoding::Hex,
        }
    }
}

impl HasherConfig {
    /// Attempt to load configuration from the asset root.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to default
    /// values so a bare asset directory can be processed without any setup.
    pub fn discover(root: &Path) -> Self {
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Whether `path` has the manifest extension.
    pub fn is_manifest_candidate(&self, path: &Path) -> bool {
        has_extension(path, &self.manifest_extension)
    }

    /// Whether `path` has one of the text post-processing extensions.
    pub fn is_text_candidate(&self, path: &Path) -> bool {
        self.text_extensions
            .iter()
            .any(|extension| has_extension(path, extension))
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .is_some_and(|actual| actual.to_string_lossy() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn falls_back_to_defaults_without_config_file() {
        let dir = tempdir().unwrap();
        assert_eq!(HasherConfig::discover(dir.path()), HasherConfig::default());
    }

    #[test]
    fn falls_back_to_defaults_on_invalid_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();
        assert_eq!(HasherConfig::discover(dir.path()), HasherConfig::default());
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{"text_extensions":["js","mjs"],"digest_encoding":"base64url"}"#,
        )
        .unwrap();

        let config = HasherConfig::discover(dir.path());
        assert_eq!(config.text_extensions, vec!["js", "mjs"]);
        assert_eq!(config.digest_encoding, DigestEncoding::Base64url);
        assert_eq!(config.manifest_extension, "json");
        assert_eq!(config.content_type, ASSET_PACK_CONTENT_TYPE);
    }

    #[test]
    fn matches_extensions_with_or_without_leading_dot() {
        let config = HasherConfig {
            text_extensions: vec![".mjs".into()],
            ..HasherConfig::default()
        };
        assert!(config.is_manifest_candidate(Path::new("/game/pack.json")));
        assert!(!config.is_manifest_candidate(Path::new("/game/pack.json.bak")));
        assert!(config.is_text_candidate(Path::new("/game/main.mjs")));
        assert!(!config.is_text_candidate(Path::new("/game/main.js")));
    }
}
