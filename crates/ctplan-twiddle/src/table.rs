//! Twiddle tables: roots of unity for one radix-r combination stage.
//!
//! For `n = r * m` the table holds `m` rows of `r` coefficients,
//! `row(c)[q] = W_n^(q*c)`, plus the `r` roots `W_r^k` used by the butterfly.
//! `W_n = exp(sign * 2*pi*i / n)` with the sign taken from the direction.

use std::f64::consts::PI;
use std::fmt;

use ctplan_core::{Direction, StrideDescriptor};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::budget::{BudgetGuard, TwiddleBudget};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TwiddleKey {
    pub radix: usize,
    pub sub_size: usize,
    pub direction: Direction,
    /// Access pattern of the stage this table serves.
    pub layout: StrideDescriptor,
}

impl TwiddleKey {
    pub fn new(radix: usize, sub_size: usize, direction: Direction, layout: StrideDescriptor) -> Self {
        Self {
            radix,
            sub_size,
            direction,
            layout,
        }
    }

    /// Transform length the table is periodic in.
    pub fn period(&self) -> usize {
        self.radix * self.sub_size
    }

    /// Bytes a table for this key occupies.
    pub fn footprint_bytes(&self) -> usize {
        (self.period() + self.radix) * std::mem::size_of::<Complex64>()
    }
}

impl fmt::Display for TwiddleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tw(r={}, m={}, {:?}, {})",
            self.radix, self.sub_size, self.direction, self.layout
        )
    }
}

/// Immutable once built; shared between plans through the provider.
pub struct TwiddleTable {
    key: TwiddleKey,
    coefficients: Vec<Complex64>,
    roots: Vec<Complex64>,
    _guard: BudgetGuard,
}

impl TwiddleTable {
    pub(crate) fn build(key: TwiddleKey, budget: &TwiddleBudget) -> Result<Self> {
        if key.radix < 2 || key.sub_size == 0 {
            return Err(Error::InvalidKey(format!("{key}")));
        }
        let guard = budget.try_acquire(key.footprint_bytes(), "twiddle")?;

        let n = key.period();
        let sign = key.direction.sign();
        let mut coefficients = Vec::with_capacity(n);
        for c in 0..key.sub_size {
            for q in 0..key.radix {
                coefficients.push(root_of_unity((q * c) % n, n, sign));
            }
        }
        let roots = (0..key.radix)
            .map(|k| root_of_unity(k, key.radix, sign))
            .collect();

        Ok(Self {
            key,
            coefficients,
            roots,
            _guard: guard,
        })
    }

    pub fn key(&self) -> &TwiddleKey {
        &self.key
    }

    pub fn radix(&self) -> usize {
        self.key.radix
    }

    /// Logical period of the table (reported in plan descriptions).
    pub fn period(&self) -> usize {
        self.key.period()
    }

    /// Coefficients for column `c`: `W_n^(q*c)` for `q` in `0..radix`.
    pub fn row(&self, c: usize) -> &[Complex64] {
        let r = self.key.radix;
        &self.coefficients[c * r..(c + 1) * r]
    }

    /// `W_r^k` for `k` in `0..radix`.
    pub fn roots(&self) -> &[Complex64] {
        &self.roots
    }

    pub fn coefficients(&self) -> &[Complex64] {
        &self.coefficients
    }

    pub fn bytes(&self) -> usize {
        self.key.footprint_bytes()
    }
}

fn root_of_unity(k: usize, n: usize, sign: f64) -> Complex64 {
    Complex64::from_polar(1.0, sign * 2.0 * PI * k as f64 / n as f64)
}
