//! Warning types produced by a safety scan

use serde::{Deserialize, Serialize};
use std::fmt;

/// The check a warning came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A banned-phrase table entry was found
    BannedPhrase,
    /// A sentence exceeded the word-count threshold
    LongSentence,
}

/// One advisory finding from a safety scan.
///
/// Warnings are produced fresh on every scan, in discovery order, and are
/// never persisted. The excerpt quotes the source text truncated to the
/// policy's excerpt length, with a `...` marker always appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Prescriptive or diagnostic phrasing was found
    BannedPhrase {
        /// The table entry that matched
        phrase: String,
        /// Truncated quote of the offending string
        excerpt: String,
    },

    /// A sentence is too long to read comfortably
    LongSentence {
        /// Whitespace-delimited word count of the offending sentence
        word_count: usize,
        /// Truncated quote of the offending sentence
        excerpt: String,
    },
}

impl Warning {
    /// Which check produced this warning
    pub fn kind(&self) -> WarningKind {
        match self {
            Self::BannedPhrase { .. } => WarningKind::BannedPhrase,
            Self::LongSentence { .. } => WarningKind::LongSentence,
        }
    }

    /// The truncated quote attached to this warning
    pub fn excerpt(&self) -> &str {
        match self {
            Self::BannedPhrase { excerpt, .. } | Self::LongSentence { excerpt, .. } => excerpt,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BannedPhrase { phrase, excerpt } => {
                write!(f, "Banned phrase \"{}\" found in: {}", phrase, excerpt)
            }
            Self::LongSentence { word_count, excerpt } => {
                write!(f, "Long sentence ({} words): {}", word_count, excerpt)
            }
        }
    }
}
