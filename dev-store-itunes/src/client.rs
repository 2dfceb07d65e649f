use url::Url;

use dev_store_core::{AppInfo, DeveloperInfo};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::lookup::{apps_for_artist, developer_from_lookup, extract_store_id, software_only};
use crate::transport::{HttpResponse, HttpTransport, Transport, TransportError};
use crate::types::{LookupResponse, SoftwareRecord};

/// Maximum number of results requested from a name search.
pub const SEARCH_LIMIT: u32 = 20;

/// Client for the catalog lookup/search API.
///
/// Each operation is one request/response cycle with no retry. Requests go
/// through the configured relay and are bounded by the configured timeout.
pub struct CatalogClient<T: Transport = HttpTransport> {
    transport: T,
    config: CatalogConfig,
}

impl CatalogClient<HttpTransport> {
    /// Create a client backed by a real HTTP transport.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let transport = HttpTransport::new(config.timeout())
            .map_err(|e| CatalogError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> CatalogClient<T> {
    pub fn with_transport(transport: T, config: CatalogConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Resolve a store URL (developer page or app page) to the developer
    /// behind it.
    pub async fn resolve_from_url(&self, store_url: &str) -> Result<DeveloperInfo, CatalogError> {
        let id = extract_store_id(store_url)?;
        let response = self.fetch(self.lookup_url(id)?).await?;
        developer_from_lookup(id, &response)
    }

    /// Search apps by name. A blank term returns nothing without a request.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<SoftwareRecord>, CatalogError> {
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }
        let response = self.fetch(self.search_url(term)?).await?;
        Ok(software_only(response))
    }

    /// All apps published by a developer.
    pub async fn list_by_developer(&self, artist_id: u64) -> Result<Vec<AppInfo>, CatalogError> {
        let response = self.fetch(self.lookup_url(artist_id)?).await?;
        Ok(apps_for_artist(artist_id, response))
    }

    fn lookup_url(&self, id: u64) -> Result<Url, CatalogError> {
        self.endpoint(
            "lookup",
            &[
                ("id", id.to_string()),
                ("country", self.config.country.clone()),
                ("entity", "software".to_string()),
            ],
        )
    }

    fn search_url(&self, term: &str) -> Result<Url, CatalogError> {
        self.endpoint(
            "search",
            &[
                ("term", term.to_string()),
                ("country", self.config.country.clone()),
                ("entity", "software".to_string()),
                ("limit", SEARCH_LIMIT.to_string()),
            ],
        )
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, CatalogError> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse_with_params(&format!("{}/{}", base, path), params)
            .map_err(|e| CatalogError::config(format!("Invalid API URL: {e}")))
    }

    async fn fetch(&self, api_url: Url) -> Result<LookupResponse, CatalogError> {
        let request_url = self.config.relay_url(api_url.as_str());
        log::debug!("GET {}", api_url);

        let outcome = tokio::time::timeout(self.config.timeout(), self.transport.get(&request_url)).await;
        let response = match outcome {
            Err(_) | Ok(Err(TransportError::Timeout)) => {
                log::error!("Request timed out after {}s: {}", self.config.timeout_secs, api_url);
                return Err(CatalogError::Timeout(self.config.timeout_secs));
            }
            Ok(Err(TransportError::Network(msg))) => {
                log::error!("Fetch error: {}", msg);
                return Err(CatalogError::Network(msg));
            }
            Ok(Ok(response)) => response,
        };

        parse_response(response)
    }
}

/// Apply the status/body policy to a completed exchange.
pub(crate) fn parse_response(response: HttpResponse) -> Result<LookupResponse, CatalogError> {
    if !response.is_success() {
        log::error!("Relay/API error (HTTP {}): {}", response.status, response.body);
        return Err(CatalogError::Api {
            status: response.status,
            body: response.body,
        });
    }

    if response.body.trim().is_empty() {
        return Err(CatalogError::EmptyResponse);
    }

    serde_json::from_str(&response.body).map_err(|e| {
        log::error!(
            "JSON parse error: {e}. Response: {}",
            response.body.chars().take(200).collect::<String>()
        );
        CatalogError::Parse(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_keeps_body_for_diagnostics() {
        let err = parse_response(HttpResponse::new(503, "upstream down")).unwrap_err();
        match err {
            CatalogError::Api { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn blank_body_is_empty_response() {
        assert!(matches!(
            parse_response(HttpResponse::new(200, "")),
            Err(CatalogError::EmptyResponse)
        ));
        assert!(matches!(
            parse_response(HttpResponse::new(200, "  \n")),
            Err(CatalogError::EmptyResponse)
        ));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            parse_response(HttpResponse::new(200, "<html>oops</html>")),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn user_messages_differ_from_diagnostics() {
        let err = parse_response(HttpResponse::new(500, "secret stack trace")).unwrap_err();
        assert!(!err.user_message().contains("secret"));
        assert!(err.to_string().contains("secret stack trace"));
    }
}
