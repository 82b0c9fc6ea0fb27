//! Access-pattern descriptors.
//!
//! Tables and kernels are selected by the *shape* of the access, not by the
//! absolute stride, so two plans that walk memory the same way can share a
//! coefficient table.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrideDescriptor {
    /// Unit element stride.
    Contiguous,
    /// A single fixed element stride other than 1.
    Uniform(usize),
    /// Mixed strides; no assumption can be made.
    General,
}

impl StrideDescriptor {
    pub const fn classify(stride: usize) -> Self {
        if stride == 1 {
            Self::Contiguous
        } else {
            Self::Uniform(stride)
        }
    }
}

impl fmt::Display for StrideDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contiguous => write!(f, "contig"),
            Self::Uniform(s) => write!(f, "stride{s}"),
            Self::General => write!(f, "general"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StrideDescriptor;

    #[test]
    fn classify_unit_stride_is_contiguous() {
        assert_eq!(StrideDescriptor::classify(1), StrideDescriptor::Contiguous);
        assert_eq!(StrideDescriptor::classify(4), StrideDescriptor::Uniform(4));
    }

    #[test]
    fn display_names_the_access_shape() {
        assert_eq!(StrideDescriptor::Contiguous.to_string(), "contig");
        assert_eq!(StrideDescriptor::Uniform(3).to_string(), "stride3");
        assert_eq!(StrideDescriptor::General.to_string(), "general");
    }
}
