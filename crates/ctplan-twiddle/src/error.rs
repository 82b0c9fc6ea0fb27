use thiserror::Error;

/// Result type local to ctplan-twiddle.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("twiddle budget exceeded for tag '{tag}': requested {requested} bytes, capacity {capacity}, used {used}")]
    BudgetExceeded {
        tag: &'static str,
        requested: usize,
        capacity: usize,
        used: usize,
    },

    #[error("invalid twiddle key: {0}")]
    InvalidKey(String),

    #[error("twiddle provider state poisoned")]
    Poisoned,
}

impl From<Error> for ctplan_core::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::BudgetExceeded {
                tag,
                requested,
                capacity,
                used,
            } => ctplan_core::Error::ResourceExhausted {
                what: tag,
                requested,
                capacity,
                used,
            },
            Error::InvalidKey(msg) => ctplan_core::Error::Invariant(msg),
            Error::Poisoned => ctplan_core::Error::Invariant("twiddle provider poisoned".into()),
        }
    }
}
