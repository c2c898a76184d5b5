pub mod config;
pub mod error;
pub mod normalizer;
pub mod reader_pdf;
pub mod reader_txt;
pub mod splitter;
#[cfg(feature = "pdfium")] pub mod reader_pdf_pdfium;
#[cfg(feature = "pure-pdf")] pub mod reader_pdf_pure;

pub use block_model::{BlockRecord, DocumentRecord, Strategy, TextStats};
pub use config::{SplitOptions, SplitParams, SPLIT_DEFAULTS};
pub use error::ExtractError;
pub use normalizer::strip_whitespace;
pub use splitter::{choose_strategy, split, split_with_params};

use chrono::Utc;
use serde::Serialize;
use sha2::Digest;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Raw text pulled out of a document, before splitting.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub source_mime: String,
    pub reader_backend: String,
    pub page_count: Option<u32>,
}

/// Result bundle including file-level metadata, the raw text and its blocks.
#[derive(Debug, Clone, Serialize)]
pub struct SplitOutput {
    pub document: DocumentRecord,
    pub text: String,
    pub blocks: Vec<BlockRecord>,
}

/// Extract the full text of a document. PDF pages are joined with `join_pages`.
pub fn extract_text(path: &str, options: &SplitOptions) -> Result<ExtractedText, ExtractError> {
    if path.to_lowercase().ends_with(".pdf") {
        let backend = options.pdf_backend.unwrap_or_else(reader_pdf::default_backend);
        let pages = reader_pdf::read_pdf_pages_with(path, backend)?;
        return Ok(ExtractedText {
            text: reader_pdf::join_pages(&pages),
            source_mime: "application/pdf".into(),
            reader_backend: backend.name().into(),
            page_count: Some(pages.len() as u32),
        });
    }

    if is_text_like(path) {
        let text = reader_txt::read_txt_with_encoding(path, options.encoding.as_deref())?;
        return Ok(ExtractedText {
            text,
            source_mime: "text/plain".into(),
            reader_backend: "txt".into(),
            page_count: Some(1),
        });
    }

    Err(ExtractError::UnsupportedFormat { path: path.to_string() })
}

/// Split already-extracted text into numbered block records.
pub fn split_text(text: &str, strategy: Strategy, params: &SplitParams) -> Vec<BlockRecord> {
    split_with_params(text, strategy, params)
        .into_iter()
        .enumerate()
        .map(|(i, b)| BlockRecord::new(i as u32, b))
        .collect()
}

/// High-level entry: extract a file, split it, and describe the run.
pub fn split_file(path: &str, strategy: Strategy, options: &SplitOptions) -> Result<SplitOutput, ExtractError> {
    let extracted = extract_text(path, options)?;
    let blocks = split_text(&extracted.text, strategy, &options.params);
    debug!(
        path,
        backend = %extracted.reader_backend,
        %strategy,
        blocks = blocks.len(),
        "split document"
    );

    let mut document = DocumentRecord {
        source_uri: path.to_string(),
        source_mime: extracted.source_mime,
        reader_backend: Some(extracted.reader_backend),
        file_size_bytes: None,
        content_sha256: None,
        page_count: extracted.page_count,
        extracted_at: Utc::now().to_rfc3339(),
        strategy,
        stats: TextStats::compute(&extracted.text, blocks.len()),
    };
    enrich_document_record(&mut document, path);
    Ok(SplitOutput { document, text: extracted.text, blocks })
}

fn is_text_like(path: &str) -> bool {
    let lower = path.to_lowercase();
    // Common text-ish extensions
    let exts = [
        ".txt", ".md", ".markdown", ".csv", ".tsv", ".log", ".json", ".yaml", ".yml",
        ".ini", ".toml", ".cfg", ".conf", ".rst", ".tex", ".srt", ".properties",
    ];
    if exts.iter().any(|e| lower.ends_with(e)) {
        return true;
    }
    // No extension: probe the first bytes for NUL
    if Path::new(path).extension().is_none() {
        if let Ok(mut f) = File::open(path) {
            let mut buf = [0u8; 2048];
            if let Ok(n) = f.read(&mut buf) {
                return !buf[..n].contains(&0);
            }
        }
    }
    false
}

// --- Metadata enrichment helpers --------------------------------------------------------------

fn enrich_document_record(doc: &mut DocumentRecord, path: &str) {
    if let Ok(md) = std::fs::metadata(path) {
        doc.file_size_bytes = Some(md.len());
    }
    doc.content_sha256 = compute_sha256_hex(path);
}

fn compute_sha256_hex(path: &str) -> Option<String> {
    let f = File::open(path).ok()?;
    let mut reader = BufReader::new(f);
    let mut hasher = sha2::Sha256::new();
    let mut buf = [0u8; 32 * 1024];
    loop {
        let n = reader.read(&mut buf).ok()?;
        if n == 0 { break; }
        hasher.update(&buf[..n]);
    }
    Some(hex::encode(hasher.finalize()))
}
