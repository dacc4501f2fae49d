use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures the console can surface. Malformed input never lands here
/// (bad `table` input is a silent no-op); the only fallible step is
/// structural encoding of a logged value, which is propagated, not swallowed.
#[derive(Error, Debug)]
pub enum Error {
    /// Structural (JSON) encoding of a logged value failed.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
