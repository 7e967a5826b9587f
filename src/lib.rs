//! Payroll rule engine for crew scheduling and timecard approval.
//!
//! This crate computes the regular/overtime/night-premium hour split, the
//! auto-break deduction, and the pay owed for a single timecard, given a
//! clock-in/clock-out interval and a configurable rule set (company or union).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
