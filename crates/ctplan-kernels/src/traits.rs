//! Butterfly and kernel traits + the `Pass` handed to a kernel.
//!
//! A radix-r stage over `n = r * m` points is `m` independent columns. Column
//! `c` gathers `r` values from `src` at `c * src_col + q * src_leg`, applies
//! twiddles and the butterfly, and scatters to `dst` at
//! `c * dst_col + k * dst_leg`.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// How the radix stage is ordered relative to the sub-transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CombinationKind {
    /// Decimation in time: sub-transforms first, then twiddle + butterfly.
    Dit,
    /// Decimation in frequency: butterfly + twiddle first, then sub-transforms.
    Dif,
}

impl CombinationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            CombinationKind::Dit => "dit",
            CombinationKind::Dif => "dif",
        }
    }
}

impl fmt::Display for CombinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An r-point DFT on a contiguous buffer.
pub trait Butterfly: Send + Sync {
    fn radix(&self) -> usize;

    /// Transform `buf[..radix]` in place. `roots[k] = W_r^k` fixes the
    /// direction; `scratch` has at least `radix` elements.
    fn run(&self, buf: &mut [Complex64], scratch: &mut [Complex64], roots: &[Complex64]);
}

/// One strided radix stage.
pub struct Pass<'a> {
    pub src: &'a [Complex64],
    pub src_col: usize,
    pub src_leg: usize,
    pub dst: &'a mut [Complex64],
    pub dst_col: usize,
    pub dst_leg: usize,
    pub columns: usize,
    /// Row-major `columns x radix` twiddle coefficients.
    pub twiddles: &'a [Complex64],
    /// `W_r^k` for `k` in `0..radix`.
    pub roots: &'a [Complex64],
}

impl Pass<'_> {
    /// Check every index the stage will touch before touching any.
    pub fn validate(&self, radix: usize) -> Result<(), KernelError> {
        if self.columns == 0 {
            return Ok(());
        }
        let expected = self.columns * radix;
        if self.twiddles.len() < expected || self.roots.len() < radix {
            return Err(KernelError::TwiddleShape {
                expected,
                got: self.twiddles.len(),
            });
        }
        let src_needed = (self.columns - 1) * self.src_col + (radix - 1) * self.src_leg + 1;
        if self.src.len() < src_needed {
            return Err(KernelError::BufferTooSmall {
                which: "source",
                needed: src_needed,
                got: self.src.len(),
            });
        }
        let dst_needed = (self.columns - 1) * self.dst_col + (radix - 1) * self.dst_leg + 1;
        if self.dst.len() < dst_needed {
            return Err(KernelError::BufferTooSmall {
                which: "destination",
                needed: dst_needed,
                got: self.dst.len(),
            });
        }
        Ok(())
    }
}

/// A combination routine selected by `(radix, kind)`.
pub trait Kernel: Send + Sync {
    fn name(&self) -> &'static str;
    fn radix(&self) -> usize;
    fn kind(&self) -> CombinationKind;
    fn run(&self, pass: Pass<'_>) -> Result<(), KernelError>;
}
