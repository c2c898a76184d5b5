//! Shared models used across crates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Segmentation strategy. The set is closed; each variant has its own handler in the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Pick `BlankLines` or `Paragraphs` from blank-line density.
    #[default]
    Auto,
    BlankLines,
    Sentences,
    Paragraphs,
    Length,
}

impl Strategy {
    /// All strategies in the order a UI should offer them.
    pub const ALL: [Strategy; 5] = [
        Strategy::Auto,
        Strategy::BlankLines,
        Strategy::Paragraphs,
        Strategy::Sentences,
        Strategy::Length,
    ];

    /// Wire name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Auto => "auto",
            Strategy::BlankLines => "blank_lines",
            Strategy::Sentences => "sentences",
            Strategy::Paragraphs => "paragraphs",
            Strategy::Length => "length",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Auto => "Auto (recommended)",
            Strategy::BlankLines => "Blank lines",
            Strategy::Sentences => "Sentences",
            Strategy::Paragraphs => "Paragraphs",
            Strategy::Length => "Fixed length",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Strategy::Auto => "Measures blank-line density and picks blank lines or paragraphs",
            Strategy::BlankLines => "Splits on blank (whitespace-only) lines",
            Strategy::Sentences => "Splits after 。！？ into single sentences",
            Strategy::Paragraphs => "Splits on line breaks, merging short lines into the previous block",
            Strategy::Length => "Splits into fixed-size chunks, extended to the next sentence end",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseStrategyError {
    #[error("unknown split strategy `{0}` (expected one of: auto, blank_lines, sentences, paragraphs, length)")]
    Unknown(String),
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Strategy::Auto),
            "blank_lines" => Ok(Strategy::BlankLines),
            "sentences" => Ok(Strategy::Sentences),
            "paragraphs" => Ok(Strategy::Paragraphs),
            "length" => Ok(Strategy::Length),
            _ => Err(ParseStrategyError::Unknown(s.to_string())),
        }
    }
}

/// A single block of text produced by the splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Stable order of the block within the source (0-based).
    pub order: u32,
    pub text: String,
    /// Length in Unicode scalar values.
    pub char_count: usize,
}

impl BlockRecord {
    pub fn new(order: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self { order, text, char_count }
    }

    /// Numbered header shown above the block, 1-based.
    pub fn header(&self) -> String {
        format!("Block {} ({} chars)", self.order + 1, self.char_count)
    }
}

/// Summary numbers shown next to a split result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub block_count: usize,
    /// Characters of the raw text, not of the blocks.
    pub char_count: usize,
    /// `\n`-delimited lines of the raw text; empty text counts as one line.
    pub line_count: usize,
}

impl TextStats {
    pub fn compute(raw: &str, block_count: usize) -> Self {
        Self {
            block_count,
            char_count: raw.chars().count(),
            line_count: raw.split('\n').count(),
        }
    }
}

/// File-level metadata for one split run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// URI or file path string for the source document.
    pub source_uri: String,
    /// MIME-like content type (e.g., "application/pdf").
    pub source_mime: String,
    pub reader_backend: Option<String>,
    pub file_size_bytes: Option<u64>,
    pub content_sha256: Option<String>,
    pub page_count: Option<u32>,
    /// RFC 3339 timestamp of the extraction.
    pub extracted_at: String,
    pub strategy: Strategy,
    pub stats: TextStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_roundtrip_through_from_str() {
        for s in Strategy::ALL {
            assert_eq!(s.as_str().parse::<Strategy>(), Ok(s));
        }
        assert_eq!(" Blank_Lines ".parse::<Strategy>(), Ok(Strategy::BlankLines));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = "words".parse::<Strategy>().unwrap_err();
        assert_eq!(err, ParseStrategyError::Unknown("words".into()));
        assert!(err.to_string().contains("paragraphs"));
    }

    #[test]
    fn strategy_serializes_as_snake_case() {
        let json = serde_json::to_string(&Strategy::BlankLines).unwrap();
        assert_eq!(json, "\"blank_lines\"");
        let back: Strategy = serde_json::from_str("\"length\"").unwrap();
        assert_eq!(back, Strategy::Length);
    }

    #[test]
    fn stats_count_chars_and_lines_of_raw_text() {
        let stats = TextStats::compute("今日は\nabc\n", 2);
        assert_eq!(stats, TextStats { block_count: 2, char_count: 8, line_count: 3 });
        assert_eq!(TextStats::compute("", 0).line_count, 1);
    }

    #[test]
    fn descriptions_do_not_pin_tunable_sizes() {
        for s in Strategy::ALL {
            assert!(!s.description().chars().any(|c| c.is_ascii_digit()), "{s}");
        }
    }

    #[test]
    fn block_header_is_one_based() {
        let b = BlockRecord::new(0, "本当？");
        assert_eq!(b.char_count, 3);
        assert_eq!(b.header(), "Block 1 (3 chars)");
    }
}
