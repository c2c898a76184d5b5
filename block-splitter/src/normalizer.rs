/// Remove every whitespace character (`char::is_whitespace`: spaces, tabs,
/// newlines, `\r`, U+3000 ...) while keeping the order of everything else.
///
/// Used for "copy without line breaks". The input is left untouched, so a
/// caller that wants to restore keeps its own copy of the original.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_mixed_whitespace() {
        assert_eq!(strip_whitespace("a \t\nb\r\nc"), "abc");
        assert_eq!(strip_whitespace("全角\u{3000}空白"), "全角空白");
        assert_eq!(strip_whitespace(""), "");
    }
}
