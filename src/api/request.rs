//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the `/compute`
//! endpoint.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, PositionLink};

/// Request body for the `/compute` endpoint.
///
/// Carries everything one payroll computation needs: the clock interval,
/// the shift context (role and union flag), the employee's rate data, and
/// any reimbursement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// The shift the timecard belongs to.
    pub shift: ShiftRequest,
    /// The employee who worked the timecard.
    pub employee: EmployeeRequest,
    /// When the employee clocked in.
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out.
    pub clock_out: NaiveDateTime,
    /// Reimbursement to add verbatim to the pay total.
    #[serde(default)]
    pub reimbursement: Option<Decimal>,
}

/// Shift context in a compute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The role the shift was worked under (drives rate resolution).
    pub role: String,
    /// Whether the governing project is a union project.
    #[serde(default)]
    pub is_union_project: bool,
}

/// Employee rate data in a compute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's base hourly rate, if on file.
    #[serde(default)]
    pub base_rate: Option<Decimal>,
    /// Linked positions with any override rates.
    #[serde(default)]
    pub positions: Vec<PositionRequest>,
}

/// Position link in a compute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRequest {
    /// The position name.
    pub name: String,
    /// Optional position-specific rate override.
    #[serde(default)]
    pub rate: Option<Decimal>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            full_name: req.full_name,
            base_rate: req.base_rate,
            positions: req.positions.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PositionRequest> for PositionLink {
    fn from(req: PositionRequest) -> Self {
        PositionLink {
            name: req.name,
            rate: req.rate,
        }
    }
}
