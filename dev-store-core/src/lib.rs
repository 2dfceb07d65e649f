//! Shared data model for dev-store: saved developers and the applications
//! fetched for them.

pub mod app;
pub mod developer;
pub mod timestamp;

pub use app::{AppInfo, large_artwork_url};
pub use developer::{Developer, DeveloperInfo};
pub use timestamp::{format_timestamp, now_timestamp, parse_timestamp};
