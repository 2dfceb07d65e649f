//! Mapping from raw lookup/search envelopes to developer and app records.
//!
//! Everything here is pure so it can be exercised without a transport;
//! [`crate::CatalogClient`] wires it to the network.

use dev_store_core::{AppInfo, DeveloperInfo};

use crate::error::CatalogError;
use crate::types::{LookupRecord, LookupResponse, SoftwareRecord};

/// Path marker preceding the numeric id in store URLs
/// (`https://apps.apple.com/jp/app/foo/id123456789`).
const ID_MARKER: &str = "/id";

/// Extract the numeric catalog id from a store URL.
///
/// Takes the first `/id<digits>` occurrence; trailing text after the digits
/// (query strings, slugs) is ignored.
pub fn extract_store_id(url: &str) -> Result<u64, CatalogError> {
    for (pos, _) in url.match_indices(ID_MARKER) {
        let rest = &url[pos + ID_MARKER.len()..];
        let digits_len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_len == 0 {
            continue;
        }
        return rest[..digits_len]
            .parse()
            .map_err(|_| CatalogError::InvalidUrl(url.to_string()));
    }
    Err(CatalogError::InvalidUrl(url.to_string()))
}

/// Build developer info from a lookup of either a developer id or an app id.
///
/// The first result decides: an artist record is the developer itself (its
/// icon borrowed from the first app in the response), a software record
/// names its publisher.
pub fn developer_from_lookup(id: u64, response: &LookupResponse) -> Result<DeveloperInfo, CatalogError> {
    if response.result_count == 0 {
        return Err(CatalogError::NotFound(id));
    }

    match response.results.first() {
        Some(LookupRecord::Artist(artist)) => {
            let icon_url = response
                .results
                .iter()
                .find_map(LookupRecord::software_artwork)
                .unwrap_or_default()
                .to_string();
            Ok(artist.to_developer(icon_url))
        }
        Some(LookupRecord::Software(app)) => Ok(app.publisher()),
        Some(LookupRecord::Malformed { .. } | LookupRecord::Other) | None => {
            Err(CatalogError::InvalidResponse)
        }
    }
}

/// Keep only software records, in provider order.
pub fn software_only(response: LookupResponse) -> Vec<SoftwareRecord> {
    response
        .results
        .into_iter()
        .filter_map(|record| match record {
            LookupRecord::Software(app) => Some(app),
            LookupRecord::Artist(_) | LookupRecord::Malformed { .. } | LookupRecord::Other => None,
        })
        .collect()
}

/// Apps published by `artist_id`.
///
/// A developer lookup can include apps credited to collaborating publishers;
/// those are dropped.
pub fn apps_for_artist(artist_id: u64, response: LookupResponse) -> Vec<AppInfo> {
    software_only(response)
        .into_iter()
        .filter(|app| app.artist_id == artist_id)
        .map(SoftwareRecord::into_app_info)
        .collect()
}

#[cfg(test)]
#[path = "tests/lookup_tests.rs"]
mod tests;
