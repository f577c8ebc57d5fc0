#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod hashing;
pub mod models;
pub mod pack;
pub mod processor;
pub mod storage;

pub use config::HasherConfig;
pub use error::{HashError, HashResult};
pub use hashing::{ContentHasher, DigestEncoding, Md5Hasher};
pub use models::{RunReport, UrlRegistry};
pub use processor::AssetPackProcessor;
pub use storage::{AssetFs, LocalFs};
