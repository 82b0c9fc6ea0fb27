//! Decimation-in-time and decimation-in-frequency stage kernels.
//!
//! DIT:  `dst[c, k] = sum_q W_r^(q*k) * (W_n^(q*c) * src[c, q])`
//! DIF:  `dst[c, k] = W_n^(k*c) * sum_q W_r^(q*k) * src[c, q]`

use num_complex::Complex64;

use crate::butterfly::default_butterfly;
use crate::error::KernelError;
use crate::traits::{Butterfly, CombinationKind, Kernel, Pass};

pub struct DitKernel {
    butterfly: Box<dyn Butterfly>,
}

impl DitKernel {
    pub fn new(radix: usize) -> Self {
        Self::with_butterfly(default_butterfly(radix))
    }

    pub fn with_butterfly(butterfly: Box<dyn Butterfly>) -> Self {
        Self { butterfly }
    }
}

impl Kernel for DitKernel {
    fn name(&self) -> &'static str {
        "ct-dit"
    }

    fn radix(&self) -> usize {
        self.butterfly.radix()
    }

    fn kind(&self) -> CombinationKind {
        CombinationKind::Dit
    }

    fn run(&self, pass: Pass<'_>) -> Result<(), KernelError> {
        let r = self.radix();
        pass.validate(r)?;
        let mut buf = vec![Complex64::default(); r];
        let mut scratch = vec![Complex64::default(); r];
        for c in 0..pass.columns {
            let tw = &pass.twiddles[c * r..(c + 1) * r];
            for (q, slot) in buf.iter_mut().enumerate() {
                *slot = pass.src[c * pass.src_col + q * pass.src_leg] * tw[q];
            }
            self.butterfly.run(&mut buf, &mut scratch, pass.roots);
            for (k, v) in buf.iter().enumerate() {
                pass.dst[c * pass.dst_col + k * pass.dst_leg] = *v;
            }
        }
        Ok(())
    }
}

pub struct DifKernel {
    butterfly: Box<dyn Butterfly>,
}

impl DifKernel {
    pub fn new(radix: usize) -> Self {
        Self::with_butterfly(default_butterfly(radix))
    }

    pub fn with_butterfly(butterfly: Box<dyn Butterfly>) -> Self {
        Self { butterfly }
    }
}

impl Kernel for DifKernel {
    fn name(&self) -> &'static str {
        "ct-dif"
    }

    fn radix(&self) -> usize {
        self.butterfly.radix()
    }

    fn kind(&self) -> CombinationKind {
        CombinationKind::Dif
    }

    fn run(&self, pass: Pass<'_>) -> Result<(), KernelError> {
        let r = self.radix();
        pass.validate(r)?;
        let mut buf = vec![Complex64::default(); r];
        let mut scratch = vec![Complex64::default(); r];
        for c in 0..pass.columns {
            let tw = &pass.twiddles[c * r..(c + 1) * r];
            for (q, slot) in buf.iter_mut().enumerate() {
                *slot = pass.src[c * pass.src_col + q * pass.src_leg];
            }
            self.butterfly.run(&mut buf, &mut scratch, pass.roots);
            for (k, v) in buf.iter().enumerate() {
                pass.dst[c * pass.dst_col + k * pass.dst_leg] = v * tw[k];
            }
        }
        Ok(())
    }
}
