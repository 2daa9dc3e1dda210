use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid pixel buffer: {0}")]
    InvalidPixelBuffer(String),

    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid encoded image: {0}")]
    InvalidEncodedImage(String),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
