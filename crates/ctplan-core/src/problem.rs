//! DFT problem descriptions.
//!
//! A problem is a transform tensor (`sz`) looped over a batch tensor
//! (`vecsz`). Each dimension carries its length and the input/output element
//! strides. Problems are immutable values; solvers derive new problems rather
//! than mutating the one they were handed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::stride::StrideDescriptor;

/// One dimension of a tensor: `n` elements, input stride `is`, output stride `os`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IoDim {
    pub n: usize,
    pub is: usize,
    pub os: usize,
}

impl IoDim {
    pub const fn new(n: usize, is: usize, os: usize) -> Self {
        Self { n, is, os }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tensor {
    pub dims: Vec<IoDim>,
}

impl Tensor {
    /// Rank-0 tensor (a single point).
    pub fn scalar() -> Self {
        Self { dims: Vec::new() }
    }

    pub fn one(dim: IoDim) -> Self {
        Self { dims: vec![dim] }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Product of all lengths (1 for rank 0).
    pub fn total(&self) -> usize {
        self.dims.iter().map(|d| d.n).product()
    }
}

/// Sign of the exponent in the transform kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    /// Unnormalized backward transform.
    Inverse,
}

impl Direction {
    pub const fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformProblem {
    pub sz: Tensor,
    pub vecsz: Tensor,
    #[serde(default)]
    pub direction: Direction,
}

impl TransformProblem {
    pub fn new(sz: Tensor, vecsz: Tensor, direction: Direction) -> Self {
        Self {
            sz,
            vecsz,
            direction,
        }
    }

    /// Unbatched 1-D forward problem.
    pub fn new_1d(n: usize, is: usize, os: usize) -> Self {
        Self::new(
            Tensor::one(IoDim::new(n, is, os)),
            Tensor::scalar(),
            Direction::Forward,
        )
    }

    pub fn with_batch(mut self, count: usize, ivs: usize, ovs: usize) -> Self {
        self.vecsz = Tensor::one(IoDim::new(count, ivs, ovs));
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Transform dimension. Only meaningful when `sz.rank() == 1`.
    pub fn dim(&self) -> Option<&IoDim> {
        self.sz.dims.first()
    }

    /// Batch dimension, if the problem has one.
    pub fn batch_dim(&self) -> Option<&IoDim> {
        self.vecsz.dims.first()
    }

    pub fn size(&self) -> usize {
        self.dim().map_or(0, |d| d.n)
    }

    pub fn batch_count(&self) -> usize {
        self.vecsz.total()
    }

    /// Batch count with its strides; strides are zero when unbatched.
    pub fn batch(&self) -> (usize, usize, usize) {
        match self.batch_dim() {
            Some(v) if self.vecsz.rank() == 1 => (v.n, v.is, v.os),
            _ => (1, 0, 0),
        }
    }

    pub fn input_descriptor(&self) -> StrideDescriptor {
        self.dim()
            .map_or(StrideDescriptor::General, |d| StrideDescriptor::classify(d.is))
    }

    pub fn output_descriptor(&self) -> StrideDescriptor {
        self.dim()
            .map_or(StrideDescriptor::General, |d| StrideDescriptor::classify(d.os))
    }

    /// Number of input elements the problem touches, counting from offset 0.
    pub fn input_extent(&self) -> usize {
        extent(self.sz.dims.iter().chain(&self.vecsz.dims).map(|d| (d.n, d.is)))
    }

    /// Number of output elements the problem touches, counting from offset 0.
    pub fn output_extent(&self) -> usize {
        extent(self.sz.dims.iter().chain(&self.vecsz.dims).map(|d| (d.n, d.os)))
    }

    /// Reject degenerate problems before they reach the search.
    pub fn validate(&self) -> Result<()> {
        if self.sz.rank() == 0 {
            return Err(Error::Problem("transform rank must be at least 1".into()));
        }
        for d in self.sz.dims.iter().chain(&self.vecsz.dims) {
            if d.n == 0 {
                return Err(Error::Problem("dimension length must be non-zero".into()));
            }
        }
        Ok(())
    }
}

fn extent(dims: impl Iterator<Item = (usize, usize)>) -> usize {
    dims.fold(1, |acc, (n, stride)| acc + n.saturating_sub(1) * stride)
}

impl fmt::Display for TransformProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            Direction::Forward => "fwd",
            Direction::Inverse => "inv",
        };
        write!(f, "dft-{dir}")?;
        for d in &self.sz.dims {
            write!(f, " n={}/is={}/os={}", d.n, d.is, d.os)?;
        }
        for v in &self.vecsz.dims {
            write!(f, " x{}/ivs={}/ovs={}", v.n, v.is, v.os)?;
        }
        Ok(())
    }
}
