//! Calculation logic for the payroll rule engine.
//!
//! This module contains all the calculation functions for computing a
//! timecard's pay, including the auto-break deduction, the regular/overtime
//! split, the night-premium overlap, effective-rate resolution, pay totals,
//! and the orchestrating [`compute_payroll`] entry point.

mod auto_break;
mod day;
mod engine;
mod night_premium;
mod overtime_split;
mod pay;
mod rate_resolution;

pub use auto_break::{AutoBreakResult, apply_auto_break};
pub use day::is_sunday;
pub use engine::compute_payroll;
pub use night_premium::{NightPremiumResult, calculate_night_premium};
pub use overtime_split::{OvertimeSplit, split_overtime};
pub use pay::{OVERTIME_MULTIPLIER, PayResult, calculate_total_pay};
pub use rate_resolution::{RateResolution, RateSource, resolve_rate};
