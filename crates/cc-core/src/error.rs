use thiserror::Error;

pub type CcResult<T> = Result<T, CcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CcError {
    /// A precondition on a caller-supplied value failed.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl CcError {
    pub fn is_invalid_arg(&self) -> bool {
        matches!(self, CcError::InvalidArg { .. })
    }
}
