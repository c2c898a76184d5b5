//! PDFium-backed PDF reader. Behind feature `pdfium`.

#![cfg(feature = "pdfium")]

use pdfium_render::prelude::*;
use std::path::PathBuf;

use crate::error::ExtractError;

fn bind_pdfium_from_env() -> Option<Box<dyn PdfiumLibraryBindings>> {
    // Prefer explicit full DLL path
    if let Ok(path) = std::env::var("PDFIUM_DLL_PATH") {
        let pb = PathBuf::from(path);
        let lib_path = if pb.is_dir() {
            Pdfium::pdfium_platform_library_name_at_path(&pb)
        } else {
            pb
        };
        if let Ok(b) = Pdfium::bind_to_library(&lib_path) { return Some(b); }
    }
    if let Ok(dir) = std::env::var("PDFIUM_DIR") {
        let pb = PathBuf::from(dir);
        let lib_path = Pdfium::pdfium_platform_library_name_at_path(&pb);
        if let Ok(b) = Pdfium::bind_to_library(&lib_path) { return Some(b); }
    }
    None
}

fn bind_pdfium_from_bundle() -> Option<Box<dyn PdfiumLibraryBindings>> {
    // Resolve relative to the block-splitter crate root
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("bin");
    let candidates = [
        Pdfium::pdfium_platform_library_name_at_path(&base.join("pdfium").join("bin")),
        Pdfium::pdfium_platform_library_name_at_path(&base.join("pdfium")),
        Pdfium::pdfium_platform_library_name_at_path(&base),
    ];
    candidates
        .iter()
        .filter(|p| p.exists())
        .find_map(|p| Pdfium::bind_to_library(p).ok())
}

fn bind_pdfium() -> Result<Box<dyn PdfiumLibraryBindings>, ExtractError> {
    // env override → bundled under block-splitter/bin → system library
    if let Some(b) = bind_pdfium_from_env() { return Ok(b); }
    if let Some(b) = bind_pdfium_from_bundle() { return Ok(b); }
    Pdfium::bind_to_system_library().map_err(ExtractError::pdf)
}

/// Page texts extracted with PDFium, in page order.
pub fn read_pdf_pages_pdfium(path: &str) -> Result<Vec<String>, ExtractError> {
    let pdfium = Pdfium::new(bind_pdfium()?);
    let document = pdfium.load_pdf_from_file(path, None).map_err(ExtractError::pdf)?;

    let mut out = Vec::new();
    for (idx, page) in document.pages().iter().enumerate() {
        let text = match page.text() {
            Ok(t) => t.all().replace("\r\n", "\n"),
            Err(err) => {
                tracing::debug!(page = idx + 1, %err, "no text layer on page");
                String::new()
            }
        };
        out.push(text);
    }
    Ok(out)
}
