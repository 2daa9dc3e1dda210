use std::io;
use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("API key is missing")]
    MissingCredential,

    #[error("There is no drawing to analyze")]
    MissingDrawing,

    #[error("Image encoding failed: {message}")]
    EncodingFailed { message: String },

    #[error("Analysis failed: {message}")]
    AnalysisFailed { message: String },

    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    #[error("Codec error: {message}")]
    CodecError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type AppResult<T> = Result<T, AppError>;
