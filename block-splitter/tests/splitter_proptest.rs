//! Property-based tests for the splitter and the whitespace normalizer.

use block_splitter::splitter::{choose_strategy, count_blank_line_separators, TERMINATORS};
use block_splitter::{split, strip_whitespace, SplitParams, Strategy as SplitStrategy};
use proptest::prelude::*;

/// Mixed Japanese/ASCII text with terminators, blank lines and odd whitespace.
fn document_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Zあいう漢字。！？ \t\u{3000}\n\r]{0,400}"
}

fn strategies() -> impl Strategy<Value = SplitStrategy> {
    prop::sample::select(SplitStrategy::ALL.to_vec())
}

proptest! {
    #[test]
    fn blocks_are_never_blank(text in document_strategy(), strategy in strategies()) {
        for block in split(&text, strategy) {
            prop_assert!(!block.trim().is_empty());
            prop_assert_eq!(block.trim(), block.as_str());
        }
    }

    #[test]
    fn blocks_preserve_source_order(text in document_strategy()) {
        let source = strip_whitespace(&text);
        for strategy in [SplitStrategy::Auto, SplitStrategy::BlankLines, SplitStrategy::Paragraphs, SplitStrategy::Length] {
            let joined = strip_whitespace(&split(&text, strategy).concat());
            prop_assert_eq!(&joined, &source, "strategy {}", strategy);
        }
    }

    #[test]
    fn sentences_only_add_a_final_terminator(text in document_strategy()) {
        let source = strip_whitespace(&text);
        let joined = strip_whitespace(&split(&text, SplitStrategy::Sentences).concat());
        let needs_terminator = source.chars().last().is_some_and(|c| !TERMINATORS.contains(&c));
        let expected = if needs_terminator { format!("{source}。") } else { source };
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn normalization_is_idempotent(text in any::<String>()) {
        let once = strip_whitespace(&text);
        prop_assert_eq!(strip_whitespace(&once), once.clone());
        prop_assert!(!once.chars().any(char::is_whitespace));
    }

    #[test]
    fn auto_delegation_follows_blank_line_density(
        paragraphs in prop::collection::vec(1usize..12, 1..10),
    ) {
        // `k` paragraphs of `p_i` lines each, separated by one blank line.
        let text = paragraphs
            .iter()
            .map(|&lines| vec!["line"; lines].join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n");
        let k = paragraphs.len() - 1;
        let n = paragraphs.iter().sum::<usize>() + k;
        prop_assert_eq!(count_blank_line_separators(&text), k);
        prop_assert_eq!(text.split('\n').count(), n);

        let params = SplitParams::default();
        let expected = if k as f64 > 0.1 * n as f64 { SplitStrategy::BlankLines } else { SplitStrategy::Paragraphs };
        prop_assert_eq!(choose_strategy(&text, &params), expected);
        prop_assert_eq!(split(&text, SplitStrategy::Auto), split(&text, expected));
    }
}
