//! Read-only presentation of a single app.

use dev_store_core::{AppInfo, parse_timestamp};

const MAX_STARS: u8 = 5;

/// Format a rating count the way the store shows it: raw below a thousand,
/// then in units of 千 (10^3) and 万 (10^4) with one decimal.
pub fn format_rating_count(count: Option<u64>) -> String {
    match count {
        None => "評価なし".to_string(),
        Some(n) if n < 1_000 => n.to_string(),
        Some(n) if n < 10_000 => format!("{:.1}千", n as f64 / 1_000.0),
        Some(n) => format!("{:.1}万", n as f64 / 10_000.0),
    }
}

/// Format an ISO-8601 instant as `YYYY/MM/DD` (UTC). Unparseable input is
/// returned as-is.
pub fn format_date(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(at) => at.format("%Y/%m/%d").to_string(),
        None => timestamp.to_string(),
    }
}

/// View model for the app detail screen.
#[derive(Debug, Clone, Copy)]
pub struct AppDetail<'a> {
    app: &'a AppInfo,
}

impl<'a> AppDetail<'a> {
    pub fn new(app: &'a AppInfo) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &'a AppInfo {
        self.app
    }

    pub fn title(&self) -> &'a str {
        &self.app.track_name
    }

    pub fn publisher(&self) -> &'a str {
        &self.app.artist_name
    }

    pub fn price(&self) -> &'a str {
        &self.app.formatted_price
    }

    /// Average rating to one decimal, or `N/A` when the app has none.
    pub fn rating(&self) -> String {
        match self.app.average_user_rating_for_current_version {
            Some(r) => format!("{r:.1}"),
            None => "N/A".to_string(),
        }
    }

    /// Rating rounded to the nearest half star, counted in halves (0..=10).
    pub fn star_halves(&self) -> u8 {
        let rating = self
            .app
            .average_user_rating_for_current_version
            .unwrap_or(0.0)
            .clamp(0.0, f64::from(MAX_STARS));
        (rating * 2.0).round() as u8
    }

    /// Five-glyph star bar, e.g. `★★★½☆` for 3.5.
    pub fn stars(&self) -> String {
        let halves = self.star_halves();
        let full = halves / 2;
        let half = halves % 2;
        let empty = MAX_STARS - full - half;
        let mut bar = "★".repeat(full as usize);
        if half == 1 {
            bar.push('½');
        }
        bar.push_str(&"☆".repeat(empty as usize));
        bar
    }

    pub fn rating_count(&self) -> String {
        format_rating_count(self.app.user_rating_count)
    }

    /// Primary genre (the first listed).
    pub fn primary_genre(&self) -> Option<&'a str> {
        self.app.genres.first().map(String::as_str)
    }

    pub fn genres(&self) -> String {
        self.app.genres.join(", ")
    }

    pub fn release_date(&self) -> String {
        format_date(&self.app.release_date)
    }

    pub fn description(&self) -> &'a str {
        &self.app.description
    }

    pub fn screenshots(&self) -> &'a [String] {
        &self.app.screenshot_urls
    }

    pub fn store_url(&self) -> &'a str {
        &self.app.track_view_url
    }

    pub fn artwork_url(&self) -> &'a str {
        &self.app.artwork_url512
    }
}
