use thiserror::Error;

#[derive(Error, Debug)]
pub enum StocktakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// Standard input reached end of file while a value was expected.
    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, StocktakeError>;
