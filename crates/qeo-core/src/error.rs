use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("unknown {option} value: {value}")]
    UnknownOption {
        option: &'static str,
        value: String,
    },
}

impl CoreError {
    /// Creates an unknown-option error for a presentation setting.
    #[must_use]
    pub fn unknown_option(option: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            option,
            value: value.into(),
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
