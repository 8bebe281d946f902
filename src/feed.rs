use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::post::{FeedRecord, RawPost};

/// Apps Script endpoint the feed page reads from.
pub const DEFAULT_FEED_URL: &str = "https://script.google.com/macros/s/AKfycbwky8cxRYdrK0Ar5uATeALQLlisoJZQb-epy-RwXE8KS4cCbCoeQvIVd58qa9m4LYDFrQ/exec";

/// GET the feed and decode its JSON array of posts.
pub async fn fetch_posts(url: &str) -> Result<Vec<RawPost>> {
    let client = reqwest::Client::new();

    info!("Fetching feed: {}", url);
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
        .context("Failed to fetch feed")?;

    decode_posts(&body)
}

/// Read a saved feed response from disk.
pub fn read_posts(path: &Path) -> Result<Vec<RawPost>> {
    info!("Reading feed file: {}", path.display());
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    decode_posts(&body)
}

/// Decode a feed body. The top level must be an array; entries that are not
/// objects are skipped, everything inside an object is normalized.
pub fn decode_posts(body: &str) -> Result<Vec<RawPost>> {
    let entries: Vec<Value> =
        serde_json::from_str(body).context("Feed is not a JSON array")?;
    let total = entries.len();

    let posts: Vec<RawPost> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            if !entry.is_object() {
                warn!("Skipping feed entry {}: not an object", i);
                return None;
            }
            // Lenient field decoding cannot fail on an object.
            serde_json::from_value::<FeedRecord>(entry).ok().map(RawPost::from)
        })
        .collect();

    info!("Decoded {} posts ({} entries)", posts.len(), total);
    Ok(posts)
}
