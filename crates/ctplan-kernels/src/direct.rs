//! Direct O(n^2) DFT over strided data.

use std::f64::consts::PI;

use ctplan_core::Direction;
use num_complex::Complex64;

use crate::error::KernelError;

/// `dst[k*os] = sum_j src[j*is] * W_n^(j*k)` for `k` in `0..n`.
pub fn dft_strided(
    src: &[Complex64],
    is: usize,
    dst: &mut [Complex64],
    os: usize,
    n: usize,
    direction: Direction,
) -> Result<(), KernelError> {
    if n == 0 {
        return Ok(());
    }
    let src_needed = (n - 1) * is + 1;
    if src.len() < src_needed {
        return Err(KernelError::BufferTooSmall {
            which: "source",
            needed: src_needed,
            got: src.len(),
        });
    }
    let dst_needed = (n - 1) * os + 1;
    if dst.len() < dst_needed {
        return Err(KernelError::BufferTooSmall {
            which: "destination",
            needed: dst_needed,
            got: dst.len(),
        });
    }

    let step = direction.sign() * 2.0 * PI / n as f64;
    for k in 0..n {
        let mut acc = Complex64::new(0.0, 0.0);
        for j in 0..n {
            // Reduce the exponent first to keep the angle small.
            let e = (j * k) % n;
            acc += src[j * is] * Complex64::from_polar(1.0, step * e as f64);
        }
        dst[k * os] = acc;
    }
    Ok(())
}
