use serde::{Deserialize, Serialize};

/// Default tuning values for the splitter.
#[derive(Debug, Clone, Copy)]
pub struct SplitDefaults {
    pub chunk_chars: usize,
    pub continuation_chars: usize,
    pub auto_blank_ratio: f64,
}

/// Shared defaults so CLI・GUI・tests can stay in sync.
pub const SPLIT_DEFAULTS: SplitDefaults = SplitDefaults {
    chunk_chars: 200,
    continuation_chars: 30,
    auto_blank_ratio: 0.1,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitParams {
    /// Target chunk size of the `length` strategy, in characters.
    pub chunk_chars: usize,
    /// Lines shorter than this (after trim) are merged into the current paragraph.
    pub continuation_chars: usize,
    /// `auto` picks blank-line splitting when separators exceed this share of lines.
    pub auto_blank_ratio: f64,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            chunk_chars: SPLIT_DEFAULTS.chunk_chars,
            continuation_chars: SPLIT_DEFAULTS.continuation_chars,
            auto_blank_ratio: SPLIT_DEFAULTS.auto_blank_ratio,
        }
    }
}

/// Options for the file-level pipeline.
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Encoding hint for text files; ignored for PDFs.
    pub encoding: Option<String>,
    pub params: SplitParams,
    pub pdf_backend: Option<crate::reader_pdf::PdfBackend>,
}
