#![forbid(unsafe_code)]
//! ctplan-kernels: the numeric side of a Cooley-Tukey stage.
//!
//! Design intent:
//! - Pure and synchronous; no table construction here (tables are passed in
//!   as slices, so this crate does not depend on the provider).
//! - A `Butterfly` is an r-point DFT on a gathered buffer.
//! - A `Kernel` wraps a butterfly with the gather/twiddle/scatter pattern of
//!   one `CombinationKind` and is looked up by `(radix, kind)` in the
//!   `KernelRegistry`.
//! - `direct` holds the O(n^2) leaf transform used when no factorization helps.

pub mod butterfly;
pub mod direct;
pub mod error;
pub mod registry;
pub mod stage;
pub mod traits;

pub use butterfly::{default_butterfly, GenericButterfly, Radix2, Radix3, Radix4};
pub use error::KernelError;
pub use registry::KernelRegistry;
pub use stage::{DifKernel, DitKernel};
pub use traits::{Butterfly, CombinationKind, Kernel, Pass};
