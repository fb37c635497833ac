//! Scan policy: the banned-phrase table and heuristic thresholds

use claritycare_core::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Built-in banned-phrase table, in precedence order.
///
/// Entries are matched as plain substrings over normalized (lowercased,
/// whitespace-collapsed) text, not at word boundaries. Short generic entries
/// such as `"take "` therefore also match inside longer phrases; the table
/// is ordered so that more specific entries win when both occur.
pub const DEFAULT_BANNED_PHRASES: [&str; 12] = [
    "you should take",
    "take ",
    "go to the er",
    "don't need a doctor",
    "dont need a doctor",
    "most likely",
    "this means you have",
    "diagnosis:",
    "start taking",
    "stop taking",
    "dose",
    "dosage",
];

/// Sentences longer than this many words are flagged
pub const DEFAULT_MAX_SENTENCE_WORDS: usize = 25;

/// Warning excerpts quote this many characters of the source text
pub const DEFAULT_EXCERPT_CHARS: usize = 140;

/// Immutable configuration for a safety scan.
///
/// The default policy reproduces the built-in table and thresholds. Policies
/// can also be loaded from YAML; fields left out of the file keep their
/// built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanPolicy {
    /// Disallowed substrings, in precedence order
    #[serde(default = "default_banned_phrases")]
    pub banned_phrases: Vec<String>,

    /// Word-count threshold for the long-sentence check (strictly exceeded)
    #[serde(default = "default_max_sentence_words")]
    pub max_sentence_words: usize,

    /// Character length of warning excerpts
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            banned_phrases: default_banned_phrases(),
            max_sentence_words: DEFAULT_MAX_SENTENCE_WORDS,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

impl ScanPolicy {
    /// Load a policy from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a policy from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

fn default_banned_phrases() -> Vec<String> {
    DEFAULT_BANNED_PHRASES.iter().map(|p| p.to_string()).collect()
}

fn default_max_sentence_words() -> usize {
    DEFAULT_MAX_SENTENCE_WORDS
}

fn default_excerpt_chars() -> usize {
    DEFAULT_EXCERPT_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_table_order() {
        let policy = ScanPolicy::default();
        assert_eq!(policy.banned_phrases.len(), 12);
        assert_eq!(policy.banned_phrases[0], "you should take");
        assert_eq!(policy.banned_phrases[1], "take ");
        assert_eq!(policy.banned_phrases[11], "dosage");
        assert_eq!(policy.max_sentence_words, 25);
        assert_eq!(policy.excerpt_chars, 140);
    }

    #[test]
    fn test_partial_yaml_keeps_builtin_defaults() {
        let policy = ScanPolicy::from_yaml("max_sentence_words: 18\n").unwrap();
        assert_eq!(policy.max_sentence_words, 18);
        assert_eq!(policy.excerpt_chars, DEFAULT_EXCERPT_CHARS);
        assert_eq!(policy.banned_phrases[0], "you should take");
    }

    #[test]
    fn test_full_yaml_override() {
        let yaml = r#"
banned_phrases:
  - "cure"
  - "guaranteed"
max_sentence_words: 30
excerpt_chars: 80
"#;
        let policy = ScanPolicy::from_yaml(yaml).unwrap();
        assert_eq!(policy.banned_phrases, ["cure", "guaranteed"]);
        assert_eq!(policy.max_sentence_words, 30);
        assert_eq!(policy.excerpt_chars, 80);
    }
}
