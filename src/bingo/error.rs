use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("Cannot sample from an empty term pool")]
    EmptyPool,

    #[error("Template does not contain a <table> grid")]
    NoGridFound,

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BingoError>;
