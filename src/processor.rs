//! Hashing run orchestrator: walks the root, rewrites asset packs and optionally text files.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::HasherConfig;
use crate::error::{HashError, HashResult};
use crate::hashing::ContentHasher;
use crate::models::{RunReport, UrlRegistry};
use crate::pack::context::AssetContext;
use crate::pack::{Classification, classify_manifest, rewrite_sections, substitute_urls};
use crate::storage::{AssetFs, walk_files};

/// Rewrites every asset pack below a root directory so each URL carries a content digest.
///
/// One processor covers a single run. The visited side-files and the registry of processed
/// packs live on the processor and are discarded with it.
pub struct AssetPackProcessor<F, H> {
  root: PathBuf,
  config: HasherConfig,
  fs: F,
  hasher: H,
  visited: BTreeSet<PathBuf>,
  registry: UrlRegistry,
  report: RunReport,
}

impl<F: AssetFs, H: ContentHasher> AssetPackProcessor<F, H> {
  /// Create a processor for the tree below `root`.
  pub fn new(root: impl Into<PathBuf>, config: HasherConfig, fs: F, hasher: H) -> Self {
    Self {
      root: root.into(),
      config,
      fs,
      hasher,
      visited: BTreeSet::new(),
      registry: UrlRegistry::default(),
      report: RunReport::default(),
    }
  }

  /// Process all asset packs, then the text files when `process_text` is set.
  pub fn run(&mut self, process_text: bool) -> HashResult<RunReport> {
    self.process_manifests()?;
    if process_text {
      self.process_text_files()?;
    }

    info!(
      manifests = self.report.manifests_written,
      atlases = self.report.atlases_written,
      text_files = self.report.text_files_written,
      "hashing complete"
    );
    Ok(self.report)
  }

  /// Rewrite every asset pack found below the root, and the atlas files they reference.
  ///
  /// Returns the counts accumulated by this processor so far.
  ///
  /// Packs are rewritten even when no URL changed. The first missing asset aborts the walk;
  /// files written before that point stay written.
  pub fn process_manifests(&mut self) -> HashResult<RunReport> {
    info!("# Processing Asset Pack files");

    let ctx = AssetContext {
      root: &self.root,
      fs: &self.fs,
      hasher: &self.hasher,
    };

    for path in walk_files(&self.fs, &self.root) {
      let path = path?;
      if !self.config.is_manifest_candidate(&path) {
        continue;
      }

      let contents = ctx.read(&path)?;
      let mut pack = match classify_manifest(&contents, &self.config.content_type) {
        Classification::Applicable(pack) => pack,
        other => {
          debug!(file = %ctx.display(&path), classification = ?other, "not an asset pack");
          continue;
        }
      };

      self.registry.register(ctx.display(&path));
      self.report.atlases_written += rewrite_sections(&ctx, &mut self.visited, &mut pack)?;

      let output = serde_json::to_vec(&pack).map_err(|source| HashError::Serialize {
        path: path.clone(),
        source,
      })?;

      info!("- Writing Pack '{}'", ctx.display(&path));
      ctx.write(&path, &output)?;
      self.report.manifests_written += 1;
    }

    Ok(self.report)
  }

  /// Append digests to literal pack URLs inside text files below the root.
  ///
  /// Digests are taken from the packs as they are on disk now, so this should run after
  /// [`Self::process_manifests`]. Only files whose content changes are written. Files that are
  /// not valid UTF-8 are skipped.
  pub fn process_text_files(&mut self) -> HashResult<RunReport> {
    info!("# Processing text files");

    let ctx = AssetContext {
      root: &self.root,
      fs: &self.fs,
      hasher: &self.hasher,
    };

    let hashes = self
      .registry
      .iter()
      .map(|url| -> HashResult<(String, String)> { Ok((url.to_string(), ctx.digest_url(url)?)) })
      .collect::<HashResult<Vec<_>>>()?;

    for path in walk_files(&self.fs, &self.root) {
      let path = path?;
      if !self.config.is_text_candidate(&path) {
        continue;
      }

      let contents = ctx.read(&path)?;
      let Ok(text) = String::from_utf8(contents) else {
        debug!(file = %ctx.display(&path), "skipping non UTF-8 text file");
        continue;
      };

      let updated = substitute_urls(&text, &hashes);
      if updated != text {
        info!("- Writing text file '{}'", ctx.display(&path));
        ctx.write(&path, updated.as_bytes())?;
        self.report.text_files_written += 1;
      }
    }

    Ok(self.report)
  }

  /// Root directory every URL is resolved against.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Packs processed so far, as root-relative URLs.
  pub fn registry(&self) -> &UrlRegistry {
    &self.registry
  }

  /// Absolute paths of atlas side-files already rewritten in this run.
  pub fn visited(&self) -> &BTreeSet<PathBuf> {
    &self.visited
  }

  /// Counts of files written so far.
  pub fn report(&self) -> RunReport {
    self.report
  }
}
