use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tailords operations
#[derive(Error, Diagnostic, Debug)]
pub enum TokenError {
    #[error("Invalid colour: {message}")]
    #[diagnostic(code(tailords::invalid_color))]
    InvalidColor {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid palette options: {message}")]
    #[diagnostic(code(tailords::invalid_palette))]
    InvalidPaletteOptions {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Accessibility unsatisfiable: {message}")]
    #[diagnostic(code(tailords::accessibility))]
    AccessibilityUnsatisfiable {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid scale parameters: {message}")]
    #[diagnostic(code(tailords::invalid_scale))]
    InvalidScaleParameters {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(tailords::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tailords::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tailords::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TokenError {
    /// Human-readable help text, if the error carries any.
    pub fn help_text(&self) -> Option<&str> {
        match self {
            TokenError::InvalidColor { help, .. }
            | TokenError::InvalidPaletteOptions { help, .. }
            | TokenError::AccessibilityUnsatisfiable { help, .. }
            | TokenError::InvalidScaleParameters { help, .. }
            | TokenError::Validation { help, .. }
            | TokenError::Parse { help, .. } => help.as_deref(),
            TokenError::Io { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
