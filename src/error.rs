/// Errors raised by chainsql.
///
/// Building statements never fails; only setting up a pool can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pool configuration value is out of range.
    #[error("invalid pool configuration `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
}

/// Result type alias for chainsql operations
pub type Result<T> = std::result::Result<T, Error>;
