use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid opcode table: {0}")]
    Json(String),

    #[error("Invalid hex byte {0:?}: expected two hex digits")]
    InvalidHexByte(String),
}

pub type Result<T> = std::result::Result<T, Error>;
