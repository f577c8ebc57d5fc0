/// Query parameter carrying the content digest.
pub const HASH_QUERY_PARAM: &str = "h";

/// Append the cache-busting digest to a URL or file name.
///
/// The URL is never inspected, so a value that already carries a digest gains a second one.
pub fn with_hash_suffix(url: &str, digest: &str) -> String {
  format!("{url}?{HASH_QUERY_PARAM}={digest}")
}
