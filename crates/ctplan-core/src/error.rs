use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid problem: {0}")]
    Problem(String),

    /// A coefficient table (or other plan resource) could not be obtained.
    /// Fatal for the plan being woken; the tree is put back to sleep first.
    #[error("resource exhausted for '{what}': requested {requested} bytes, capacity {capacity}, used {used}")]
    ResourceExhausted {
        what: &'static str,
        requested: usize,
        capacity: usize,
        used: usize,
    },

    #[error("plan applied while asleep: {0}")]
    PlanAsleep(String),

    #[error("buffer too small for '{which}': need {needed} elements, got {got}")]
    BufferTooSmall {
        which: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("no kernel registered: {0}")]
    Kernel(String),

    #[error("Hashing error: {0}")]
    Hash(String),

    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Hash(e.to_string())
    }
}
