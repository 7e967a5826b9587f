//! Employee model and related types.
//!
//! This module defines the Employee struct and its position links, which
//! supply the inputs for effective-rate resolution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A link between an employee and a position they can fill.
///
/// A position may carry an override rate; when the shift's role matches the
/// position name, that rate takes precedence over the employee's base rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionLink {
    /// The position name (e.g., "Electrician").
    pub name: String,
    /// Optional position-specific hourly rate override.
    #[serde(default)]
    pub rate: Option<Decimal>,
}

/// Represents an employee whose timecards are subject to payroll computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's base hourly rate, if one is on file.
    #[serde(default)]
    pub base_rate: Option<Decimal>,
    /// Positions the employee is linked to, with any override rates.
    #[serde(default)]
    pub positions: Vec<PositionLink>,
}
