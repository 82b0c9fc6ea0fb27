use thiserror::Error;

#[derive(Debug, Error)]
pub enum KernelError {
    #[error("{which} buffer too small: need {needed} elements, got {got}")]
    BufferTooSmall {
        which: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("twiddle slice has {got} coefficients, expected {expected}")]
    TwiddleShape { expected: usize, got: usize },

    #[error("no kernel for radix {radix} ({kind})")]
    Missing { radix: usize, kind: &'static str },
}

impl From<KernelError> for ctplan_core::Error {
    fn from(e: KernelError) -> Self {
        match e {
            KernelError::BufferTooSmall { which, needed, got } => {
                ctplan_core::Error::BufferTooSmall { which, needed, got }
            }
            other => ctplan_core::Error::Kernel(other.to_string()),
        }
    }
}
