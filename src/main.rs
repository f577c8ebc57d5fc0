//! Command line entry point for hashing asset pack URLs in place.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use asset_pack_hasher::{AssetPackProcessor, DigestEncoding, HasherConfig, LocalFs, Md5Hasher};

/// Append content hashes to the URLs referenced by asset pack files.
#[derive(Parser, Debug)]
#[command(name = "asset-pack-hasher", version, about, arg_required_else_help = true)]
struct Args {
  /// Root directory containing the asset packs. Every URL is resolved against it.
  root: PathBuf,

  /// Also rewrite pack URLs found in text files (JavaScript sources by default).
  #[arg(long, visible_alias = "js")]
  text: bool,

  /// Extension of text files to rewrite. Repeat to pass several; overrides the config file.
  #[arg(long = "text-ext", value_name = "EXT")]
  text_extensions: Vec<String>,

  /// Digest encoding used in the `?h=` suffix.
  #[arg(long, value_enum)]
  encoding: Option<DigestEncoding>,

  /// Configuration file. Defaults to `asset-hash.config.json` in the root.
  #[arg(long, value_name = "PATH")]
  config: Option<PathBuf>,

  /// Log skipped files and visited atlases.
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let args = Args::parse();
  init_tracing(args.verbose);

  let root = args
    .root
    .canonicalize()
    .with_context(|| format!("root directory not found '{}'", args.root.display()))?;
  if !root.is_dir() {
    bail!("root '{}' is not a directory", root.display());
  }

  let mut config = match &args.config {
    Some(path) => HasherConfig::from_path(path)
      .with_context(|| format!("failed to load config from {}", path.display()))?,
    None => HasherConfig::discover(&root),
  };
  if !args.text_extensions.is_empty() {
    config.text_extensions = args.text_extensions;
  }
  if let Some(encoding) = args.encoding {
    config.digest_encoding = encoding;
  }

  let hasher = Md5Hasher::new(config.digest_encoding);
  let mut processor = AssetPackProcessor::new(root, config, LocalFs, hasher);
  processor
    .run(args.text)
    .context("asset pack hashing aborted")?;

  Ok(())
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .without_time()
    .init();
}
