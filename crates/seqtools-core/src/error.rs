use thiserror::Error;

/// Canonical result for seqtools.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations detected before any output is allocated.
///
/// None of these are transient: they describe a caller handing an operation
/// input it cannot work with. Cursor overrun is *not* represented here; it is
/// reported through the exhaustion flag instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Too few elements or inputs for the requested operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("step mismatch: length {len} is not divisible by step {step}")]
    StepMismatch { len: usize, step: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for the "needs at least `min` elements" family of checks.
    pub fn too_short(op: &str, min: usize, len: usize) -> Self {
        Error::InvalidArgument(format!(
            "{op} needs at least {min} element(s), sequence has {len}"
        ))
    }
}
