use tracing::warn;

use crate::error::ExtractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfBackend {
    Stub,
    PureRust,
    Pdfium,
}

impl PdfBackend {
    pub fn name(self) -> &'static str {
        match self {
            PdfBackend::Stub => "stub",
            PdfBackend::PureRust => "lopdf",
            PdfBackend::Pdfium => "pdfium",
        }
    }
}

/// Select the default backend based on enabled cargo features.
pub fn default_backend() -> PdfBackend {
    #[cfg(feature = "pdfium")] { return PdfBackend::Pdfium; }
    #[cfg(all(not(feature = "pdfium"), feature = "pure-pdf"))] { return PdfBackend::PureRust; }
    #[cfg(all(not(feature = "pdfium"), not(feature = "pure-pdf")))] { return PdfBackend::Stub; }
}

/// Extract the text of every page, one string per page, in page order.
pub fn read_pdf_pages_with(path: &str, backend: PdfBackend) -> Result<Vec<String>, ExtractError> {
    match backend {
        PdfBackend::Stub => Err(ExtractError::BackendUnavailable { backend: "pdf" }),
        PdfBackend::PureRust => {
            #[cfg(feature = "pure-pdf")]
            {
                return crate::reader_pdf_pure::read_pdf_pages_pure(path);
            }
            #[allow(unreachable_code)]
            {
                warn!(path, "pure-pdf backend not enabled");
                Err(ExtractError::BackendUnavailable { backend: "pure-pdf" })
            }
        }
        PdfBackend::Pdfium => {
            #[cfg(feature = "pdfium")]
            {
                return crate::reader_pdf_pdfium::read_pdf_pages_pdfium(path);
            }
            #[allow(unreachable_code)]
            {
                warn!(path, "pdfium backend not enabled");
                Err(ExtractError::BackendUnavailable { backend: "pdfium" })
            }
        }
    }
}

/// Concatenate page texts, appending `\n` after each page.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let cap = pages.iter().map(|p| p.as_ref().len() + 1).sum();
    let mut text = String::with_capacity(cap);
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_joined_with_trailing_newlines() {
        assert_eq!(join_pages(&["一頁目", "二頁目"]), "一頁目\n二頁目\n");
        assert_eq!(join_pages::<&str>(&[]), "");
    }

    #[test]
    fn stub_backend_reports_unavailable() {
        let err = read_pdf_pages_with("missing.pdf", PdfBackend::Stub).unwrap_err();
        assert!(matches!(err, ExtractError::BackendUnavailable { .. }));
    }
}
