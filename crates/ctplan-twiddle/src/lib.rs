#![forbid(unsafe_code)]
//! ctplan-twiddle: coefficient (twiddle-factor) tables for Cooley-Tukey plans.
//!
//! Tables are built on demand by a [`TwiddleProvider`], keyed by
//! `(radix, sub_size, direction, layout)`, shared read-only between every plan
//! that asks for the same key, and freed when the last [`TwiddleHandle`] is
//! released. Every table build is charged against a hard byte budget with an
//! RAII guard, so a plan tree can never hold more table memory than the cap.

pub mod budget;
pub mod error;
pub mod provider;
pub mod table;
pub mod tracking;

pub use budget::{BudgetGuard, TwiddleBudget};
pub use error::{Error, Result};
pub use provider::{TwiddleHandle, TwiddleProvider};
pub use table::{TwiddleKey, TwiddleTable};
pub use tracking::{StatsSnapshot, TwiddleStats};
