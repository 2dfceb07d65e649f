use serde::{Deserialize, Serialize};

/// Size token embedded in catalog artwork URLs for the 100px variant.
const SMALL_ARTWORK_TOKEN: &str = "100x100";
const LARGE_ARTWORK_TOKEN: &str = "512x512";

/// Display metadata for one published application.
///
/// Fetched fresh each time a developer is opened; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub track_id: u64,
    pub track_name: String,
    pub artwork_url100: String,
    pub artwork_url512: String,
    pub track_view_url: String,
    pub formatted_price: String,
    pub genres: Vec<String>,
    pub description: String,
    pub average_user_rating_for_current_version: Option<f64>,
    pub user_rating_count: Option<u64>,
    pub release_date: String,
    pub artist_view_url: String,
    pub screenshot_urls: Vec<String>,
    pub artist_id: u64,
    pub artist_name: String,
}

/// Derive the 512px artwork URL from a 100px one by swapping the size token.
///
/// URLs without the token are returned unchanged.
pub fn large_artwork_url(artwork_url100: &str) -> String {
    artwork_url100.replacen(SMALL_ARTWORK_TOKEN, LARGE_ARTWORK_TOKEN, 1)
}
