//! Heuristic block splitting.
//!
//! Every strategy is a pure function over the input text. Output blocks are
//! trimmed, non-empty, and in source order; identical blocks are not merged.

use block_model::Strategy;
use tracing::debug;

use crate::config::SplitParams;

/// Sentence terminators (full-width period, exclamation, question mark).
pub const TERMINATORS: [char; 3] = ['。', '！', '？'];

/// Appended to a trailing sentence that has no terminator of its own.
const DEFAULT_TERMINATOR: char = '。';

fn is_terminator(ch: char) -> bool {
    TERMINATORS.contains(&ch)
}

/// Split `text` with the default parameters.
pub fn split(text: &str, strategy: Strategy) -> Vec<String> {
    split_with_params(text, strategy, &SplitParams::default())
}

pub fn split_with_params(text: &str, strategy: Strategy, params: &SplitParams) -> Vec<String> {
    match strategy {
        Strategy::Auto => {
            let chosen = choose_strategy(text, params);
            debug!(strategy = %chosen, "auto split strategy selected");
            split_with_params(text, chosen, params)
        }
        Strategy::BlankLines => split_blank_lines(text),
        Strategy::Sentences => split_sentences(text),
        Strategy::Paragraphs => split_paragraphs(text, params.continuation_chars),
        Strategy::Length => split_length(text, params.chunk_chars),
    }
}

/// Decide what `Strategy::Auto` delegates to: `BlankLines` when blank-line
/// separators exceed `auto_blank_ratio` of all lines, `Paragraphs` otherwise.
pub fn choose_strategy(text: &str, params: &SplitParams) -> Strategy {
    let blank = count_blank_line_separators(text);
    let lines = text.split('\n').count();
    if blank as f64 > params.auto_blank_ratio * lines as f64 {
        Strategy::BlankLines
    } else {
        Strategy::Paragraphs
    }
}

pub fn count_blank_line_separators(text: &str) -> usize {
    blank_line_separators(text).len()
}

/// Byte ranges of blank-line separators.
///
/// A separator starts at `\n`, runs over whitespace (`char::is_whitespace`,
/// so spaces, tabs, `\r`, U+3000 and further newlines all count as blank) and
/// ends right after the last `\n` of that run. A run holding a single `\n` is
/// an ordinary line break, not a separator.
fn blank_line_separators(text: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if ch != '\n' { continue; }
        let mut newlines = 1usize;
        let mut end = idx + 1;
        while let Some(&(j, c)) = chars.peek() {
            if !c.is_whitespace() { break; }
            if c == '\n' {
                newlines += 1;
                end = j + 1;
            }
            chars.next();
        }
        if newlines >= 2 { out.push((idx, end)); }
    }
    out
}

fn push_trimmed(out: &mut Vec<String>, candidate: &str) {
    let t = candidate.trim();
    if !t.is_empty() { out.push(t.to_string()); }
}

fn split_blank_lines(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut start = 0usize;
    for (sep_start, sep_end) in blank_line_separators(text) {
        push_trimmed(&mut out, &text[start..sep_start]);
        start = sep_end;
    }
    push_trimmed(&mut out, &text[start..]);
    out
}

/// A sentence ends after a run of terminators, so "本当？！" stays one sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if !is_terminator(ch) { continue; }
        let mut end = idx + ch.len_utf8();
        while let Some(&(j, c)) = chars.peek() {
            if !is_terminator(c) { break; }
            end = j + c.len_utf8();
            chars.next();
        }
        push_sentence(&mut out, &text[start..end]);
        start = end;
    }
    push_sentence(&mut out, &text[start..]);
    out
}

fn push_sentence(out: &mut Vec<String>, candidate: &str) {
    let t = candidate.trim();
    if t.is_empty() { return; }
    let mut sentence = t.to_string();
    if !t.chars().next_back().is_some_and(is_terminator) {
        sentence.push(DEFAULT_TERMINATOR);
    }
    out.push(sentence);
}

/// Fold over lines carrying `(current, out)`. Short lines continue the current
/// block, long lines open a new one, blank lines close it.
fn split_paragraphs(text: &str, continuation_chars: usize) -> Vec<String> {
    let (current, mut out) = text.split('\n').fold(
        (String::new(), Vec::new()),
        |(mut current, mut out): (String, Vec<String>), line| {
            let line = line.trim();
            if line.is_empty() {
                flush(&mut out, current);
                return (String::new(), out);
            }
            if line.chars().count() < continuation_chars {
                if !current.is_empty() { current.push(' '); }
                current.push_str(line);
                (current, out)
            } else {
                flush(&mut out, current);
                (line.to_string(), out)
            }
        },
    );
    flush(&mut out, current);
    out
}

fn flush(out: &mut Vec<String>, current: String) {
    if !current.is_empty() { out.push(current); }
}

/// Fixed-size chunks of `chunk_chars` characters, extended forward to end on
/// the next terminator or newline (inclusive). When no terminator is left
/// anywhere ahead, chunks are cut at exactly `chunk_chars`.
fn split_length(text: &str, chunk_chars: usize) -> Vec<String> {
    let chunk = chunk_chars.max(1);
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let len = chars.len();
    let byte_at = |k: usize| if k < len { chars[k].0 } else { text.len() };
    let is_stop = |c: char| is_terminator(c) || c == '\n';

    let mut out = Vec::new();
    let mut pos = 0usize;
    // Set once a forward scan reaches the end; nothing ahead can stop a chunk after that.
    let mut exhausted = false;
    while pos < len {
        let mut end = (pos + chunk).min(len);
        if end < len && !exhausted {
            match chars[end..].iter().position(|&(_, c)| is_stop(c)) {
                Some(offset) => end += offset + 1,
                None => exhausted = true,
            }
        }
        push_trimmed(&mut out, &text[byte_at(pos)..byte_at(end)]);
        pos = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_splits_on_whitespace_only_lines() {
        assert_eq!(split("A\n\nB\n\nC", Strategy::BlankLines), vec!["A", "B", "C"]);
        assert_eq!(split("A\n  \t\n\n B \r\n\r\nC\n", Strategy::BlankLines), vec!["A", "B", "C"]);
        assert_eq!(split("A\nB", Strategy::BlankLines), vec!["A\nB"]);
    }

    #[test]
    fn separator_scan_matches_blank_runs() {
        assert_eq!(count_blank_line_separators("a\n\nb\n \n\nc"), 2);
        assert_eq!(count_blank_line_separators("a\nb\nc"), 0);
        assert_eq!(count_blank_line_separators("\n\n"), 1);
        assert_eq!(count_blank_line_separators("a\n\u{3000}\nb"), 1);
    }

    #[test]
    fn sentences_keep_their_terminator() {
        let got = split("今日は晴れです。明日は雨でしょう！本当？", Strategy::Sentences);
        assert_eq!(got, vec!["今日は晴れです。", "明日は雨でしょう！", "本当？"]);
    }

    #[test]
    fn trailing_sentence_gets_default_terminator() {
        let got = split("一つ目。 二つ目\n", Strategy::Sentences);
        assert_eq!(got, vec!["一つ目。", "二つ目。"]);
    }

    // A run such as "？！" closes one sentence instead of splitting at every
    // terminator, so no block consists of a lone "！".
    #[test]
    fn terminator_runs_stay_with_their_sentence() {
        assert_eq!(split("本当？！次。", Strategy::Sentences), vec!["本当？！", "次。"]);
    }

    #[test]
    fn paragraphs_merge_short_lines() {
        let text = "Short\nAnother short line\nThis is a sufficiently long line that exceeds thirty characters easily";
        let got = split(text, Strategy::Paragraphs);
        assert_eq!(
            got,
            vec![
                "Short Another short line",
                "This is a sufficiently long line that exceeds thirty characters easily",
            ]
        );
    }

    #[test]
    fn paragraphs_absorb_short_trailing_lines_and_flush_on_blank() {
        let long = "x".repeat(30);
        let text = format!("{long}\nwrapped\n\n{long}");
        let got = split(&text, Strategy::Paragraphs);
        assert_eq!(got, vec![format!("{long} wrapped"), long.clone()]);
    }

    #[test]
    fn length_cuts_at_chunk_size_without_terminators() {
        let text = "a".repeat(450);
        let got = split(&text, Strategy::Length);
        let lens: Vec<usize> = got.iter().map(|b| b.chars().count()).collect();
        assert_eq!(lens, vec![200, 200, 50]);
    }

    #[test]
    fn length_extends_to_next_terminator() {
        let text = format!("{}{}。{}", "あ".repeat(200), "い".repeat(10), "う".repeat(5));
        let got = split(&text, Strategy::Length);
        assert_eq!(got, vec![format!("{}{}。", "あ".repeat(200), "い".repeat(10)), "う".repeat(5)]);
    }

    #[test]
    fn length_extends_past_one_chunk_to_reach_a_terminator() {
        let text = format!("{}{}。{}", "a".repeat(200), "b".repeat(250), "c".repeat(10));
        let got = split(&text, Strategy::Length);
        let lens: Vec<usize> = got.iter().map(|b| b.chars().count()).collect();
        assert_eq!(lens, vec![451, 10]);
        assert!(got[0].ends_with('。'));
    }

    #[test]
    fn length_includes_terminator_at_chunk_boundary() {
        let text = format!("{}！{}", "あ".repeat(200), "い".repeat(20));
        let got = split(&text, Strategy::Length);
        assert_eq!(got[0].chars().count(), 201);
        assert_eq!(got, vec![format!("{}！", "あ".repeat(200)), "い".repeat(20)]);
    }

    #[test]
    fn length_treats_newline_as_a_stop() {
        let text = format!("{}\n{}", "x".repeat(205), "y".repeat(30));
        let got = split(&text, Strategy::Length);
        assert_eq!(got, vec!["x".repeat(205), "y".repeat(30)]);
    }

    #[test]
    fn length_falls_back_to_fixed_cuts_after_the_last_terminator() {
        let text = format!("{}。{}", "a".repeat(210), "b".repeat(450));
        let got = split(&text, Strategy::Length);
        let lens: Vec<usize> = got.iter().map(|b| b.chars().count()).collect();
        assert_eq!(lens, vec![211, 200, 200, 50]);
    }

    #[test]
    fn auto_prefers_blank_lines_when_dense() {
        let params = SplitParams::default();
        assert_eq!(choose_strategy("A\n\nB\n\nC", &params), Strategy::BlankLines);
        assert_eq!(choose_strategy("a\nb\nc\nd", &params), Strategy::Paragraphs);
        assert_eq!(choose_strategy("", &params), Strategy::Paragraphs);
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        for s in Strategy::ALL {
            assert!(split("", s).is_empty(), "{s}");
            assert!(split(" \n\t\n ", s).is_empty(), "{s}");
        }
    }
}
