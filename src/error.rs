use miette::Diagnostic;
use thiserror::Error;

/// Main error type for venn operations
#[derive(Error, Diagnostic, Debug)]
pub enum VennError {
    #[error("IO error: {0}")]
    #[diagnostic(code(venn::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(venn::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(venn::config))]
    Configuration {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Predicate failed at ({x}, {y}): {message}")]
    #[diagnostic(code(venn::predicate))]
    PredicateEvaluation { x: f64, y: f64, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(venn::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(venn::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl VennError {
    /// Build a predicate failure for the sample at `(x, y)`.
    pub fn evaluation(x: f64, y: f64, message: impl Into<String>) -> Self {
        VennError::PredicateEvaluation {
            x,
            y,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VennError>;
