#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Dictionary source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Dictionary source unavailable, use the transliteration path")]
    SourceUnavailable,
}
