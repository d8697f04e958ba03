#[derive(Debug, thiserror::Error)]
pub enum TextKitError {
    #[error("invalid pattern: {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("randomness unavailable: {reason}")]
    RandomnessUnavailable { reason: String },
}

pub type Result<T> = std::result::Result<T, TextKitError>;
