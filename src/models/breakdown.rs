//! Payroll breakdown output model.
//!
//! This module contains the [`PayrollBreakdown`] type produced by the engine
//! for every computed timecard, together with the audit trace structures
//! that record each rule application.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a rule application.
///
/// Each step captures the input, output, and reasoning for one stage of
/// the payroll computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Severity of an audit warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational; no reviewer action needed.
    Low,
    /// The result is usable but should be double-checked before approval.
    Medium,
    /// The result is likely wrong without corrected inputs.
    High,
}

/// A warning generated during computation.
///
/// Warnings indicate issues that do not prevent computation but should be
/// visible to the reviewer before approval (for example, a missing rate
/// that defaulted to zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

/// The complete audit trace for one payroll computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuditTrace {
    /// The sequence of computation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during computation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a payroll computation for one timecard.
///
/// Hour fields and the pay total carry full precision internally; call
/// [`PayrollBreakdown::rounded`] at the formatting boundary to get the
/// 2-decimal-place presentation values.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{AuditTrace, PayrollBreakdown};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = PayrollBreakdown {
///     regular_hours: Decimal::from_str("8.0").unwrap(),
///     overtime_hours: Decimal::from_str("1.5").unwrap(),
///     night_premium_hours: Decimal::ZERO,
///     net_total_hours: Decimal::from_str("9.5").unwrap(),
///     break_duration_minutes: 30,
///     total_pay: Decimal::from_str("205.00").unwrap(),
///     low_confidence: false,
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(breakdown.worked_hours_check(), breakdown.net_total_hours);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Worked hours at the base pay rate.
    pub regular_hours: Decimal,
    /// Worked hours beyond the daily threshold (or all hours on a
    /// designated overtime day), paid at 1.5x.
    pub overtime_hours: Decimal,
    /// Hours falling within the configured night window. This is an
    /// informational overlay on the regular/overtime split, never a
    /// third pay bucket.
    pub night_premium_hours: Decimal,
    /// Net worked hours after the auto-break deduction.
    pub net_total_hours: Decimal,
    /// Minutes deducted by the auto-break rule (0 when under threshold).
    pub break_duration_minutes: u32,
    /// Total pay owed, including any reimbursement.
    pub total_pay: Decimal,
    /// True when a money input was missing and defaulted to zero. Lets the
    /// review UI distinguish a true $0 shift from a data-entry gap.
    pub low_confidence: bool,
    /// Complete audit trace of computation decisions.
    pub audit_trace: AuditTrace,
}

impl PayrollBreakdown {
    /// Returns a copy with hour and pay fields rounded to 2 decimal places.
    ///
    /// Rounding is half-up and happens only here; intermediate arithmetic
    /// keeps full precision.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::{AuditTrace, PayrollBreakdown};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let breakdown = PayrollBreakdown {
    ///     regular_hours: Decimal::from_str("7.999999").unwrap(),
    ///     overtime_hours: Decimal::ZERO,
    ///     night_premium_hours: Decimal::ZERO,
    ///     net_total_hours: Decimal::from_str("7.999999").unwrap(),
    ///     break_duration_minutes: 0,
    ///     total_pay: Decimal::from_str("159.99998").unwrap(),
    ///     low_confidence: false,
    ///     audit_trace: AuditTrace::default(),
    /// };
    /// let rounded = breakdown.rounded();
    /// assert_eq!(rounded.regular_hours, Decimal::from_str("8.00").unwrap());
    /// assert_eq!(rounded.total_pay, Decimal::from_str("160.00").unwrap());
    /// ```
    pub fn rounded(&self) -> Self {
        let round = |d: Decimal| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self {
            regular_hours: round(self.regular_hours),
            overtime_hours: round(self.overtime_hours),
            night_premium_hours: round(self.night_premium_hours),
            net_total_hours: round(self.net_total_hours),
            break_duration_minutes: self.break_duration_minutes,
            total_pay: round(self.total_pay),
            low_confidence: self.low_confidence,
            audit_trace: self.audit_trace.clone(),
        }
    }

    /// Sum of the regular and overtime buckets.
    ///
    /// Always equals `net_total_hours`; exposed for consistency checks in
    /// callers and tests.
    pub fn worked_hours_check(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}
