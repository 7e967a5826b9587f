//! Data models for the payroll rule engine.

mod breakdown;
mod employee;
mod rules;
mod timecard;

pub use breakdown::{AuditStep, AuditTrace, AuditWarning, PayrollBreakdown, WarningSeverity};
pub use employee::{Employee, PositionLink};
pub use rules::{PayrollRules, RuleMode};
pub use timecard::{TimecardEntry, TimecardStatus};
