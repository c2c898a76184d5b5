use block_model::{BlockRecord, DocumentRecord, Strategy, TextStats};
use block_splitter::{split_text, strip_whitespace, SplitParams};

/// Text shown in one editable area, with a strip/restore toggle.
/// The original is kept so "Restore" never depends on the stripped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleText {
    original: String,
    pub shown: String,
    stripped: bool,
}

impl ToggleText {
    pub fn new(text: impl Into<String>) -> Self {
        let original = text.into();
        Self { shown: original.clone(), original, stripped: false }
    }

    pub fn is_stripped(&self) -> bool {
        self.stripped
    }

    /// Flip between stripped and original text; returns the text to put on the clipboard
    /// when stripping, `None` when restoring.
    pub fn toggle(&mut self) -> Option<String> {
        if self.stripped {
            self.shown = self.original.clone();
            self.stripped = false;
            None
        } else {
            self.shown = strip_whitespace(&self.original);
            self.stripped = true;
            Some(self.shown.clone())
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.stripped { "Restore" } else { "Remove newlines" }
    }
}

/// A split block as displayed.
#[derive(Debug, Clone)]
pub struct BlockView {
    pub record: BlockRecord,
    pub text: ToggleText,
}

impl From<BlockRecord> for BlockView {
    fn from(record: BlockRecord) -> Self {
        Self { text: ToggleText::new(record.text.clone()), record }
    }
}

/// Everything derived from one loaded document.
#[derive(Debug, Clone, Default)]
pub struct LoadedDocument {
    pub document: Option<DocumentRecord>,
    raw_text: String,
    pub all_text: Option<ToggleText>,
    pub blocks: Vec<BlockView>,
    pub stats: TextStats,
}

impl LoadedDocument {
    /// Wrap a finished split; `blocks` are shown as-is without splitting again.
    pub fn new(document: DocumentRecord, raw_text: String, blocks: Vec<BlockRecord>) -> Self {
        let stats = TextStats::compute(&raw_text, blocks.len());
        Self {
            document: Some(document),
            all_text: Some(ToggleText::new(raw_text.clone())),
            raw_text,
            blocks: blocks.into_iter().map(BlockView::from).collect(),
            stats,
        }
    }

    /// Recompute every block from the retained raw text; stripped state is reset.
    pub fn resplit(&mut self, strategy: Strategy, params: &SplitParams) {
        self.blocks = split_text(&self.raw_text, strategy, params)
            .into_iter()
            .map(BlockView::from)
            .collect();
        self.stats = TextStats::compute(&self.raw_text, self.blocks.len());
        if let Some(doc) = self.document.as_mut() {
            doc.strategy = strategy;
            doc.stats = self.stats;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_strips_then_restores_original() {
        let mut t = ToggleText::new("一行目\n二行目 です");
        assert_eq!(t.toggle_label(), "Remove newlines");
        assert_eq!(t.toggle().as_deref(), Some("一行目二行目です"));
        assert!(t.is_stripped());
        assert_eq!(t.toggle_label(), "Restore");
        assert_eq!(t.toggle(), None);
        assert_eq!(t.shown, "一行目\n二行目 です");
    }

    #[test]
    fn loaded_document_keeps_the_given_blocks() {
        let raw = "A\n\nB".to_string();
        let blocks = vec![BlockRecord::new(0, "A"), BlockRecord::new(1, "B")];
        let doc = LoadedDocument::new(DocumentRecord::default(), raw, blocks);
        let texts: Vec<&str> = doc.blocks.iter().map(|b| b.text.shown.as_str()).collect();
        assert_eq!(texts, vec!["A", "B"]);
        assert_eq!(doc.stats, TextStats { block_count: 2, char_count: 4, line_count: 3 });
    }

    #[test]
    fn resplit_recomputes_blocks_and_stats() {
        let raw = "A\n\nB\n\nC".to_string();
        let mut doc = LoadedDocument::new(DocumentRecord::default(), raw, Vec::new());
        doc.resplit(Strategy::BlankLines, &SplitParams::default());
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(doc.stats, TextStats { block_count: 3, char_count: 7, line_count: 5 });

        doc.blocks[0].text.toggle();
        doc.resplit(Strategy::Paragraphs, &SplitParams::default());
        assert_eq!(doc.blocks.len(), 3);
        assert!(!doc.blocks[0].text.is_stripped());
        assert_eq!(doc.document.as_ref().map(|d| d.strategy), Some(Strategy::Paragraphs));
    }
}
