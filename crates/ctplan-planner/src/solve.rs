//! Generic execution entry point and plan fingerprints.

use ctplan_core::hash::{hash_str, Hash256};
use ctplan_core::{describe_to_string, Complex64, Error, Plan, Result};

/// Run `plan` over `input` into `output`.
///
/// The plan must be awake and both buffers must cover the plan's strided
/// extents; otherwise nothing is written.
pub fn solve(plan: &dyn Plan, input: &[Complex64], output: &mut [Complex64]) -> Result<()> {
    if !plan.is_awake() {
        return Err(Error::PlanAsleep(describe_to_string(plan)));
    }
    let (need_in, need_out) = plan.extents();
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
    plan.apply(input, output)
}

/// Stable identity of a plan's shape: blake3 of its description.
pub fn fingerprint(plan: &dyn Plan) -> Hash256 {
    hash_str(&describe_to_string(plan))
}
