/// Errors that can occur while talking to the catalog API.
///
/// `Display` carries diagnostic detail for logs; [`CatalogError::user_message`]
/// is the localized text meant for the person at the terminal.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No /id<digits> segment in store URL: {0}")]
    InvalidUrl(String),

    #[error("Lookup for id {0} returned no results")]
    NotFound(u64),

    #[error("Lookup response has no artist or software record first")]
    InvalidResponse,

    #[error("Network request failed: {0}")]
    Network(String),

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("API returned an empty body")]
    EmptyResponse,

    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "無効なApp Store URLです。IDが見つかりません。",
            Self::NotFound(_) => "開発者またはアプリが見つかりませんでした。",
            Self::InvalidResponse => "有効な開発者またはアプリ情報が見つかりませんでした。",
            Self::Network(_) => {
                "ネットワークリクエストに失敗しました。インターネット接続を確認するか、後でもう一度お試しください。"
            }
            Self::Api { .. } => "APIリクエストに失敗しました。",
            Self::EmptyResponse => "APIから空の応答を受け取りました。",
            Self::Parse(_) => "APIからの応答の解析に失敗しました。",
            Self::Timeout(_) => "リクエストがタイムアウトしました。後でもう一度お試しください。",
            Self::Config(_) => "設定の読み込みに失敗しました。",
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
