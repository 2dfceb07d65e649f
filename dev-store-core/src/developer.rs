use serde::{Deserialize, Serialize};

/// A software publisher resolved from the catalog but not yet saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperInfo {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

/// A saved developer.
///
/// Field order here is the field order of the persisted slot and of export
/// documents, so it must not be rearranged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    /// Provider-assigned publisher id, unique within a collection.
    pub id: u64,
    pub name: String,
    pub url: String,
    /// ISO-8601 instant the developer was saved, set once.
    pub date_added: String,
    pub icon_url: String,
    /// Free-text tags. Older exports may omit the field entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Developer {
    /// Build a freshly saved developer with an empty tag set.
    pub fn from_info(info: DeveloperInfo, date_added: impl Into<String>) -> Self {
        Self {
            id: info.id,
            name: info.name,
            url: info.url,
            date_added: date_added.into(),
            icon_url: info.icon_url,
            tags: Some(Vec::new()),
        }
    }

    /// Tags as a slice, treating an absent tag set as empty.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

#[cfg(test)]
#[path = "tests/developer_tests.rs"]
mod tests;
