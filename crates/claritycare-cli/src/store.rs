//! Topic dataset loading, filtering, and search

use claritycare_core::{Error, Result, Topic};
use claritycare_scanner::normalize_text;
use std::path::Path;

/// Known browse categories; `"All"` disables the category filter
pub const CATEGORIES: [&str; 3] = ["All", "Everyday Symptoms", "Post-Diagnosis Companion"];

/// Read-only collection of topic records, loaded once per session.
#[derive(Debug)]
pub struct TopicStore {
    topics: Vec<Topic>,
}

impl TopicStore {
    /// Load a JSON array of topic records from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::store(format!("missing topic dataset at {}: {}", path.display(), e))
        })?;
        let topics: Vec<Topic> = serde_json::from_str(&content)?;

        tracing::info!(count = topics.len(), path = %path.display(), "loaded topic dataset");
        Ok(Self { topics })
    }

    /// Build a store from already-deserialized records
    pub fn from_topics(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    /// All records, in file order
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Find one topic by title, whitespace- and case-insensitively
    pub fn find(&self, title: &str) -> Option<&Topic> {
        let needle = normalize_text(title);
        self.topics
            .iter()
            .find(|t| normalize_text(t.title()) == needle)
    }

    /// Records passing the category filter and the search query, in order
    pub fn filter(&self, category: &str, query: &str) -> Vec<&Topic> {
        self.topics
            .iter()
            .filter(|t| category == "All" || t.category() == category)
            .filter(|t| matches_search(t, query))
            .collect()
    }
}

/// Search over title and both summaries. An empty query passes everything;
/// otherwise the normalized query must occur in the normalized, space-joined
/// haystack.
fn matches_search(topic: &Topic, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let haystack = format!(
        "{} {} {}",
        topic.text_field("title").unwrap_or(""),
        topic.text_field("oneMinuteSummary").unwrap_or(""),
        topic.text_field("eli5Summary").unwrap_or(""),
    );
    normalize_text(&haystack).contains(&normalize_text(query))
}
