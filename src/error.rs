use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkovError {
    #[error("Invalid window size {0}: n-grams need 1 to 10 words")]
    InvalidWindowSize(usize),

    #[error("Unknown filter kind '{0}' (expected uid, u, rid or r)")]
    UnknownFilterKind(String),

    #[error("Malformed filter '{0}': expected kind:value")]
    MalformedFilter(String),

    #[error("Unsupported window size {0}: no fact declaration for it")]
    UnsupportedWindowSize(usize),

    #[error("Gram '{gram}' does not split into {n} words")]
    GramArity { gram: String, n: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type MkResult<T> = Result<T, MarkovError>;
