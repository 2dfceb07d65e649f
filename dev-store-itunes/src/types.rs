use serde::{Deserialize, Deserializer};
use serde_json::Value;

use dev_store_core::{AppInfo, DeveloperInfo, large_artwork_url};

/// Envelope returned by both `/lookup` and `/search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub result_count: u64,
    #[serde(default, deserialize_with = "lenient_records")]
    pub results: Vec<LookupRecord>,
}

/// One entry of a lookup/search response, discriminated by `wrapperType`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "wrapperType")]
pub enum LookupRecord {
    #[serde(rename = "artist")]
    Artist(ArtistRecord),
    #[serde(rename = "software")]
    Software(SoftwareRecord),
    /// An artist or software record missing required fields. Only its
    /// discriminant and artwork survive.
    #[serde(skip)]
    Malformed {
        wrapper_type: String,
        artwork_url100: String,
    },
    /// Any other discriminant (collections, tracks) or a missing one.
    #[serde(other)]
    Other,
}

impl LookupRecord {
    pub fn as_software(&self) -> Option<&SoftwareRecord> {
        match self {
            Self::Software(app) => Some(app),
            Self::Artist(_) | Self::Malformed { .. } | Self::Other => None,
        }
    }

    /// Small artwork of any software-tagged record, decodable or not.
    pub fn software_artwork(&self) -> Option<&str> {
        match self {
            Self::Software(app) => Some(app.artwork_url100.as_str()),
            Self::Malformed {
                wrapper_type,
                artwork_url100,
            } if wrapper_type == "software" => Some(artwork_url100.as_str()),
            _ => None,
        }
    }
}

/// Publisher record (`wrapperType: "artist"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    #[serde(default)]
    pub artist_type: String,
    pub artist_name: String,
    #[serde(default)]
    pub artist_link_url: String,
    pub artist_id: u64,
    #[serde(default)]
    pub primary_genre_name: String,
    #[serde(default)]
    pub primary_genre_id: Option<u64>,
}

impl ArtistRecord {
    /// Developer info for this publisher, with the icon taken from one of its apps.
    pub fn to_developer(&self, icon_url: String) -> DeveloperInfo {
        DeveloperInfo {
            id: self.artist_id,
            name: self.artist_name.clone(),
            url: self.artist_link_url.clone(),
            icon_url,
        }
    }
}

/// Application record (`wrapperType: "software"`).
///
/// The catalog omits some fields for a few apps (no ratings yet, no
/// screenshots), so everything not needed for identity has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareRecord {
    pub track_id: u64,
    pub track_name: String,
    pub artist_id: u64,
    pub artist_name: String,
    #[serde(default)]
    pub artwork_url100: String,
    #[serde(default)]
    pub track_view_url: String,
    #[serde(default)]
    pub formatted_price: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub average_user_rating_for_current_version: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<u64>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub artist_view_url: String,
    #[serde(default)]
    pub screenshot_urls: Vec<String>,
}

impl SoftwareRecord {
    /// The publisher of this app, as a developer to save.
    pub fn publisher(&self) -> DeveloperInfo {
        DeveloperInfo {
            id: self.artist_id,
            name: self.artist_name.clone(),
            url: self.artist_view_url.clone(),
            icon_url: self.artwork_url100.clone(),
        }
    }

    pub fn into_app_info(self) -> AppInfo {
        let artwork_url512 = large_artwork_url(&self.artwork_url100);
        AppInfo {
            track_id: self.track_id,
            track_name: self.track_name,
            artwork_url100: self.artwork_url100,
            artwork_url512,
            track_view_url: self.track_view_url,
            formatted_price: self.formatted_price,
            genres: self.genres,
            description: self.description,
            average_user_rating_for_current_version: self.average_user_rating_for_current_version,
            user_rating_count: self.user_rating_count,
            release_date: self.release_date,
            artist_view_url: self.artist_view_url,
            screenshot_urls: self.screenshot_urls,
            artist_id: self.artist_id,
            artist_name: self.artist_name,
        }
    }
}

/// Decode each result on its own so one bad entry degrades instead of
/// failing the whole response.
fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<LookupRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(decode_record).collect())
}

fn decode_record(value: Value) -> LookupRecord {
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let wrapper_type = field("wrapperType");
    let artwork_url100 = field("artworkUrl100");

    match serde_json::from_value(value) {
        Ok(record) => record,
        Err(e) if wrapper_type == "artist" || wrapper_type == "software" => {
            log::warn!("Skipping malformed {wrapper_type} record: {e}");
            LookupRecord::Malformed {
                wrapper_type,
                artwork_url100,
            }
        }
        Err(e) => {
            log::debug!("Treating unrecognized lookup record as other: {e}");
            LookupRecord::Other
        }
    }
}
