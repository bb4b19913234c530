use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskdeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskdeskError>;
