use thiserror::Error;

/// Failure returned by a command handler. The router logs it and keeps the loop running.
#[derive(Error, Debug)]
pub enum JjError {
    #[error("Handler error: {0}")]
    Handler(String),
}

/// Failure at an input or output channel boundary.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Speech was not understood")]
    Unintelligible,

    #[error("Speech recognition failed: {0}")]
    Recognition(String),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("Channel unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a knowledge lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No article found for \"{0}\"")]
    NotFound(String),

    #[error("\"{0}\" is ambiguous")]
    Ambiguous(String),

    #[error("Lookup request failed: {0}")]
    Request(String),
}

pub type Result<T> = std::result::Result<T, JjError>;
