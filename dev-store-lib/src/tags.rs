use dev_store_core::Developer;

use crate::error::TagRejection;

/// Working copy of one developer's tags while they are being edited.
///
/// Nothing is saved until the caller hands [`into_tags`](Self::into_tags) to
/// [`crate::DeveloperCollection::set_tags`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEditor {
    tags: Vec<String>,
}

impl TagEditor {
    pub fn new(tags: &[String]) -> Self {
        Self {
            tags: tags.to_vec(),
        }
    }

    pub fn for_developer(developer: &Developer) -> Self {
        Self::new(developer.tags())
    }

    /// Add a tag after trimming surrounding whitespace.
    pub fn add(&mut self, raw: &str) -> Result<(), TagRejection> {
        let tag = raw.trim();
        if tag.is_empty() {
            return Err(TagRejection::Blank);
        }
        if self.contains(tag) {
            return Err(TagRejection::Duplicate(tag.to_string()));
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    /// Remove a tag. Returns `false` if it wasn't present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}
