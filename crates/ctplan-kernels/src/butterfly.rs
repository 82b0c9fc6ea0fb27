//! Butterflies. Radix 2, 3 and 4 are hand-unrolled; everything else goes
//! through the O(r^2) generic butterfly.

use num_complex::Complex64;

use crate::traits::Butterfly;

pub struct Radix2;

impl Butterfly for Radix2 {
    fn radix(&self) -> usize {
        2
    }

    #[inline]
    fn run(&self, buf: &mut [Complex64], _scratch: &mut [Complex64], _roots: &[Complex64]) {
        let (a, b) = (buf[0], buf[1]);
        buf[0] = a + b;
        buf[1] = a - b;
    }
}

pub struct Radix3;

impl Butterfly for Radix3 {
    fn radix(&self) -> usize {
        3
    }

    #[inline]
    fn run(&self, buf: &mut [Complex64], _scratch: &mut [Complex64], roots: &[Complex64]) {
        // roots[1] = -1/2 +/- i*sqrt(3)/2; only the imaginary part differs by direction.
        let rot = Complex64::new(0.0, roots[1].im);
        let s = buf[1] + buf[2];
        let d = (buf[1] - buf[2]) * rot;
        let m = buf[0] - s * 0.5;
        buf[0] += s;
        buf[1] = m + d;
        buf[2] = m - d;
    }
}

pub struct Radix4;

impl Butterfly for Radix4 {
    fn radix(&self) -> usize {
        4
    }

    #[inline]
    fn run(&self, buf: &mut [Complex64], _scratch: &mut [Complex64], roots: &[Complex64]) {
        // roots[1] is -i (forward) or +i (inverse).
        let t0 = buf[0] + buf[2];
        let t1 = buf[0] - buf[2];
        let t2 = buf[1] + buf[3];
        let t3 = (buf[1] - buf[3]) * roots[1];
        buf[0] = t0 + t2;
        buf[1] = t1 + t3;
        buf[2] = t0 - t2;
        buf[3] = t1 - t3;
    }
}

pub struct GenericButterfly {
    radix: usize,
}

impl GenericButterfly {
    pub fn new(radix: usize) -> Self {
        Self { radix }
    }
}

impl Butterfly for GenericButterfly {
    fn radix(&self) -> usize {
        self.radix
    }

    fn run(&self, buf: &mut [Complex64], scratch: &mut [Complex64], roots: &[Complex64]) {
        let r = self.radix;
        for (k, out) in scratch[..r].iter_mut().enumerate() {
            let mut acc = Complex64::new(0.0, 0.0);
            for (q, x) in buf[..r].iter().enumerate() {
                acc += x * roots[(q * k) % r];
            }
            *out = acc;
        }
        buf[..r].copy_from_slice(&scratch[..r]);
    }
}

/// Fastest butterfly available for `radix`.
pub fn default_butterfly(radix: usize) -> Box<dyn Butterfly> {
    match radix {
        2 => Box::new(Radix2),
        3 => Box::new(Radix3),
        4 => Box::new(Radix4),
        r => Box::new(GenericButterfly::new(r)),
    }
}
