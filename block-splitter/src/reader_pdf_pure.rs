//! Pure-Rust PDF reader. Behind feature `pure-pdf`.

#![cfg(feature = "pure-pdf")]

use lopdf::Document;

use crate::error::ExtractError;

/// Page texts extracted with `lopdf`. Pages without a text layer yield an empty string.
pub fn read_pdf_pages_pure(path: &str) -> Result<Vec<String>, ExtractError> {
    let doc = Document::load(path).map_err(ExtractError::pdf)?;
    let mut out = Vec::new();
    for (page_num, _page_id) in doc.get_pages() {
        let text = match doc.extract_text(&[page_num]) {
            Ok(t) => t.replace("\r\n", "\n"),
            Err(err) => {
                tracing::debug!(page = page_num, %err, "no text extracted from page");
                String::new()
            }
        };
        out.push(text);
    }
    Ok(out)
}
