use thiserror::Error;

/// Failures of the document-extraction step. Splitting itself cannot fail.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported file type: {path}")]
    UnsupportedFormat { path: String },
    #[error("{backend} backend is not enabled in this build")]
    BackendUnavailable { backend: &'static str },
    #[error("pdf backend error: {message}")]
    Pdf { message: String },
}

impl ExtractError {
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        Self::Io { path: path.to_string(), source }
    }

    pub(crate) fn pdf(message: impl std::fmt::Display) -> Self {
        Self::Pdf { message: message.to_string() }
    }
}
