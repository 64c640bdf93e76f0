use crate::fold::CombinerError;
use crate::sequence::SequenceError;
use crate::series::EmptyContainerError;
use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The unified error type for listfold
#[derive(Error, Debug)]
pub enum ListFoldError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Sequence error: {message}")]
    Sequence {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Iteration failed at index {index}: {message}")]
    Iteration {
        code: u16,
        message: String,
        index: usize,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl ListFoldError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a sequence error with specific code
    pub fn sequence_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Sequence {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an iteration error for the element at `index`
    pub fn iteration(code: u16, message: impl Into<String>, index: usize) -> Self {
        Self::Iteration {
            code,
            message: message.into(),
            index,
            source: None,
        }
    }

    /// Create a validation error with default code
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_GENERIC,
            message: message.into(),
            field: None,
            source: None,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Sequence { source: src, .. }
            | Self::Iteration { source: src, .. }
            | Self::Validation { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Sequence { message, .. }
            | Self::Iteration { message, .. }
            | Self::Validation { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Sequence { .. } => 3,
            Self::Iteration { .. } => 4,
            Self::Validation { .. } => 8,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Sequence { code, .. }
            | Self::Iteration { code, .. }
            | Self::Validation { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }
}

impl From<SequenceError> for ListFoldError {
    fn from(err: SequenceError) -> Self {
        let code = match err {
            SequenceError::NonFinite { .. } => ErrorCode::SEQUENCE_NON_FINITE,
            SequenceError::InvalidStep { .. } => ErrorCode::SEQUENCE_INVALID_STEP,
            SequenceError::UnreachableEnd { .. } => ErrorCode::SEQUENCE_UNREACHABLE_END,
            SequenceError::TooLong { .. } => ErrorCode::SEQUENCE_GENERIC,
        };
        Self::sequence_with_code(code, err.to_string()).with_source(err)
    }
}

impl From<CombinerError<EmptyContainerError>> for ListFoldError {
    fn from(err: CombinerError<EmptyContainerError>) -> Self {
        let index = err.index;
        Self::iteration(
            ErrorCode::ITERATION_EMPTY_ACCUMULATOR,
            err.source.to_string(),
            index,
        )
        .with_source(err.source)
    }
}

impl From<std::io::Error> for ListFoldError {
    fn from(err: std::io::Error) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_IO_ERROR, err.to_string(), None).with_source(err)
    }
}

impl From<toml::de::Error> for ListFoldError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_INVALID_TOML, err.message().to_string(), None)
            .with_source(err)
    }
}
