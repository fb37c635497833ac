//! The content-safety scanner

use crate::extract::extract_strings;
use crate::policy::ScanPolicy;
use crate::warning::Warning;
use aho_corasick::AhoCorasick;
use claritycare_core::{ContentNode, Result, Topic};
use regex::Regex;

/// Collapse whitespace runs to single spaces, trim, and lowercase.
///
/// This is the matching form used for phrase checks and topic search;
/// reported excerpts always quote the original text.
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Advisory linter for topic content.
///
/// A scan is a pure function of one topic record and the scanner's policy:
/// it never mutates the record, never fails, and never blocks rendering.
/// Matchers are compiled once at construction; `scan` takes `&self`, so one
/// scanner can serve concurrent scans of independent topics.
pub struct SafetyScanner {
    policy: ScanPolicy,
    phrases: AhoCorasick,
    sentence_boundary: Regex,
}

impl SafetyScanner {
    /// Create a scanner with the built-in policy
    pub fn new() -> Result<Self> {
        Self::with_policy(ScanPolicy::default())
    }

    /// Create a scanner with a custom policy
    pub fn with_policy(policy: ScanPolicy) -> Result<Self> {
        let phrases = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&policy.banned_phrases)
            .map_err(|e| {
                claritycare_core::Error::scanner(format!("Failed to build phrase matcher: {}", e))
            })?;

        let sentence_boundary = Regex::new(r"[.!?]").map_err(|e| {
            claritycare_core::Error::scanner(format!("Failed to compile sentence splitter: {}", e))
        })?;

        Ok(Self {
            policy,
            phrases,
            sentence_boundary,
        })
    }

    /// The policy this scanner was built with
    pub fn policy(&self) -> &ScanPolicy {
        &self.policy
    }

    /// Scan one topic record, returning warnings in discovery order.
    ///
    /// Strings are visited in the extractor's depth-first order. Each string
    /// yields at most one warning per check: the banned-phrase warning (if
    /// any) followed by the long-sentence warning (if any).
    pub fn scan(&self, topic: &Topic) -> Vec<Warning> {
        self.scan_node(topic.root())
    }

    /// Scan an arbitrary content tree
    pub fn scan_node(&self, node: &ContentNode) -> Vec<Warning> {
        let mut warnings = Vec::new();

        for s in extract_strings(node) {
            if let Some(warning) = self.check_banned_phrase(s) {
                warnings.push(warning);
            }
            if let Some(warning) = self.check_long_sentence(s) {
                warnings.push(warning);
            }
        }

        tracing::debug!(warnings = warnings.len(), "safety scan complete");
        warnings
    }

    /// First banned phrase found in `s`, in table order.
    ///
    /// Matching is plain substring containment over the normalized form, not
    /// word-boundary aware: `"take "` also matches inside `"retake the"`.
    /// The winning entry is the lowest-index table entry occurring anywhere
    /// in the string, regardless of match position.
    fn check_banned_phrase(&self, s: &str) -> Option<Warning> {
        let normalized = normalize_text(s);

        let index = self
            .phrases
            .find_overlapping_iter(&normalized)
            .map(|m| m.pattern().as_usize())
            .min()?;

        Some(Warning::BannedPhrase {
            phrase: self.policy.banned_phrases[index].clone(),
            excerpt: self.excerpt(s),
        })
    }

    /// First sentence of `s` whose word count exceeds the threshold.
    ///
    /// Sentences are the segments between terminal punctuation in the
    /// original, un-normalized string; empty segments are skipped.
    fn check_long_sentence(&self, s: &str) -> Option<Warning> {
        for sentence in self.sentence_boundary.split(s) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            let word_count = sentence.split_whitespace().count();
            if word_count > self.policy.max_sentence_words {
                return Some(Warning::LongSentence {
                    word_count,
                    excerpt: self.excerpt(sentence),
                });
            }
        }

        None
    }

    /// Leading excerpt of `s` with the truncation marker always appended.
    ///
    /// Counted in characters, never bytes, so multi-byte text cannot be
    /// split mid-code-point.
    fn excerpt(&self, s: &str) -> String {
        let mut excerpt: String = s.chars().take(self.policy.excerpt_chars).collect();
        excerpt.push_str("...");
        excerpt
    }
}
