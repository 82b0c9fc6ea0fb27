//! Static cost model used to rank candidate plans.
//!
//! These are heuristics, not measurements: the search only needs a total
//! order that prefers radices known to combine well.

/// Radix with the best cache/register behavior for a combination stage.
pub const OPTIMAL_RADIX: usize = 12;

/// Weight of the squared distance from `OPTIMAL_RADIX`.
pub const K1: f64 = 0.1;

/// Cost of a Cooley-Tukey stage of radix `radix` over a child of cost `child`.
///
/// Always strictly greater than `child`.
pub fn ct_cost(radix: usize, child: f64) -> f64 {
    let d = radix as f64 - OPTIMAL_RADIX as f64;
    1.0 + K1 * d * d + child
}

/// Cost of the direct O(n^2) transform.
pub fn direct_cost(n: usize) -> f64 {
    let n = n as f64;
    n * n / 4.0
}
