use std::fmt::{self, Write as _};
use std::sync::Arc;

use ctplan_core::{
    describe_to_string, Complex64, Direction, Error, Plan, Result, StrideDescriptor,
    TransformProblem,
};
use ctplan_kernels::{CombinationKind, Pass};
use ctplan_twiddle::{TwiddleHandle, TwiddleKey, TwiddleProvider};

use super::CtDesc;
use crate::cost::ct_cost;

/// A radix-r combination stage over an exclusively owned child plan.
///
/// `twiddles` is `Some` exactly while the plan is awake. Dropping the plan
/// releases the table (if held) and drops the child.
pub struct CtPlan {
    desc: Arc<CtDesc>,
    provider: TwiddleProvider,
    child: Box<dyn Plan>,
    radix: usize,
    sub_size: usize,
    is: usize,
    os: usize,
    vl: usize,
    ivs: usize,
    ovs: usize,
    direction: Direction,
    /// Stride pattern of the non-scratch side of the stage.
    layout: StrideDescriptor,
    twiddles: Option<TwiddleHandle>,
    cost: f64,
    extents: (usize, usize),
}

impl CtPlan {
    pub(crate) fn new(
        desc: Arc<CtDesc>,
        provider: TwiddleProvider,
        problem: &TransformProblem,
        child: Box<dyn Plan>,
    ) -> Self {
        let radix = desc.radix();
        let n = problem.size();
        let (is, os) = problem.dim().map_or((1, 1), |d| (d.is, d.os));
        let (vl, ivs, ovs) = problem.batch();
        let layout = match desc.kind() {
            CombinationKind::Dit => problem.output_descriptor(),
            CombinationKind::Dif => problem.input_descriptor(),
        };
        let cost = ct_cost(radix, child.cost());
        Self {
            desc,
            provider,
            child,
            radix,
            sub_size: n / radix,
            is,
            os,
            vl,
            ivs,
            ovs,
            direction: problem.direction,
            layout,
            twiddles: None,
            cost,
            extents: (problem.input_extent(), problem.output_extent()),
        }
    }

    pub fn radix(&self) -> usize {
        self.radix
    }

    pub fn sub_size(&self) -> usize {
        self.sub_size
    }

    pub fn kind(&self) -> CombinationKind {
        self.desc.kind()
    }

    pub fn solver_name(&self) -> &str {
        &self.desc.name
    }

    pub fn child(&self) -> &dyn Plan {
        self.child.as_ref()
    }

    pub fn batch(&self) -> (usize, usize, usize) {
        (self.vl, self.ivs, self.ovs)
    }

    pub fn twiddle_key(&self) -> TwiddleKey {
        TwiddleKey::new(self.radix, self.sub_size, self.direction, self.layout)
    }

    /// The currently held table, if awake.
    pub fn twiddles(&self) -> Option<&TwiddleHandle> {
        self.twiddles.as_ref()
    }

    fn period(&self) -> usize {
        self.twiddles
            .as_ref()
            .map_or_else(|| self.twiddle_key().period(), |t| t.period())
    }
}

impl Plan for CtPlan {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn awake(&mut self, turning_on: bool) -> Result<()> {
        self.child.awake(turning_on)?;

        if turning_on {
            if self.twiddles.is_none() {
                match self.provider.acquire(self.twiddle_key()) {
                    Ok(handle) => self.twiddles = Some(handle),
                    Err(e) => {
                        // Leave no half-awake subtree behind.
                        self.child.awake(false)?;
                        return Err(e.into());
                    }
                }
                #[cfg(feature = "tracing")]
                tracing::trace!(radix = self.radix, m = self.sub_size, "ct plan awake");
            }
        } else if self.twiddles.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(radix = self.radix, m = self.sub_size, "ct plan asleep");
        }
        Ok(())
    }

    fn is_awake(&self) -> bool {
        self.twiddles.is_some()
    }

    fn extents(&self) -> (usize, usize) {
        self.extents
    }

    fn apply(&self, input: &[Complex64], output: &mut [Complex64]) -> Result<()> {
        let table = self
            .twiddles
            .as_ref()
            .ok_or_else(|| Error::PlanAsleep(describe_to_string(self)))?;
        let (need_in, need_out) = self.extents;
        if input.len() < need_in {
            return Err(Error::BufferTooSmall {
                which: "input",
                needed: need_in,
                got: input.len(),
            });
        }
        if output.len() < need_out {
            return Err(Error::BufferTooSmall {
                which: "output",
                needed: need_out,
                got: output.len(),
            });
        }

        let (r, m) = (self.radix, self.sub_size);
        let mut scratch = vec![Complex64::default(); r * m];
        for v in 0..self.vl {
            let src = &input[v * self.ivs..];
            let dst = &mut output[v * self.ovs..];
            match self.kind() {
                CombinationKind::Dit => {
                    self.child.apply(src, &mut scratch)?;
                    self.desc.kernel.run(Pass {
                        src: &scratch,
                        src_col: 1,
                        src_leg: m,
                        dst,
                        dst_col: self.os,
                        dst_leg: m * self.os,
                        columns: m,
                        twiddles: table.coefficients(),
                        roots: table.roots(),
                    })?;
                }
                CombinationKind::Dif => {
                    self.desc.kernel.run(Pass {
                        src,
                        src_col: self.is,
                        src_leg: m * self.is,
                        dst: &mut scratch,
                        dst_col: 1,
                        dst_leg: m,
                        columns: m,
                        twiddles: table.coefficients(),
                        roots: table.roots(),
                    })?;
                    self.child.apply(&scratch, dst)?;
                }
            }
        }
        Ok(())
    }

    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "({}-{}/{}", self.desc.name, self.radix, self.period())?;
        if self.is != 1 || self.os != 1 {
            write!(out, "/is={}/os={}", self.is, self.os)?;
        }
        if self.vl > 1 {
            write!(out, "-x{}", self.vl)?;
        }
        out.write_char(' ')?;
        self.child.describe(out)?;
        out.write_char(')')
    }
}
