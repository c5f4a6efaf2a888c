use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseUrlError {
    #[error("invalid url: {source}")]
    InvalidUrl {
        #[from]
        source: url::ParseError,
    },

    #[error("decompose failed: {reason}")]
    Decompose { reason: String },
}

impl ParseUrlError {
    pub fn decompose<S: ToString>(str: S) -> Self {
        Self::Decompose { reason: str.to_string() }
    }
}
