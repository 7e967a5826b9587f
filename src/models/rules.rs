//! Payroll rule set model.
//!
//! This module defines the [`PayrollRules`] struct holding the configurable
//! decision values for the payroll computation, and the [`RuleMode`] enum
//! distinguishing the company rule set from the union rule set.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The governing rule mode for a timecard's project.
///
/// Exactly one active rule set exists per mode; the caller selects the set
/// based on whether the timecard's project is flagged as a union project.
///
/// # Example
///
/// ```
/// use timecard_engine::models::RuleMode;
///
/// assert_eq!(RuleMode::Union.to_string(), "union");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleMode {
    /// The default company rule set.
    Company,
    /// The alternate rule set for union projects.
    Union,
}

impl std::fmt::Display for RuleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleMode::Company => write!(f, "company"),
            RuleMode::Union => write!(f, "union"),
        }
    }
}

/// A payroll rule set (company or union).
///
/// Rules are read-only inputs to the engine. The caller fetches the correct
/// set once and passes it explicitly to every computation; the engine never
/// caches rules or substitutes defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRules {
    /// Which rule set this is.
    pub mode: RuleMode,
    /// Hours after which excess hours in a single shift become overtime.
    pub daily_overtime_threshold: Decimal,
    /// Start of the night-premium window (local time of day).
    pub night_premium_start: NaiveTime,
    /// End of the night-premium window (exclusive). May be earlier than the
    /// start, in which case the window wraps past midnight.
    pub night_premium_end: NaiveTime,
    /// Gross hours above which an automatic unpaid break is deducted.
    pub auto_break_threshold: Decimal,
    /// Minutes deducted when the auto-break threshold is exceeded.
    pub auto_break_duration: u32,
    /// If true, any work performed on a Sunday is entirely overtime.
    /// Only meaningful for union rules.
    #[serde(default)]
    pub calculate_sundays_as_ot: bool,
    /// First day of the pay week (company rules only). Informational; the
    /// engine itself does not consume it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_start_day: Option<String>,
}

impl PayrollRules {
    /// Validates the rule values.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the rules are usable, or [`EngineError::InvalidRules`]
    /// when a threshold is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::{PayrollRules, RuleMode};
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let rules = PayrollRules {
    ///     mode: RuleMode::Company,
    ///     daily_overtime_threshold: Decimal::new(8, 0),
    ///     night_premium_start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     night_premium_end: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     auto_break_threshold: Decimal::new(6, 0),
    ///     auto_break_duration: 30,
    ///     calculate_sundays_as_ot: false,
    ///     week_start_day: Some("monday".to_string()),
    /// };
    /// assert!(rules.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.daily_overtime_threshold < Decimal::ZERO {
            return Err(EngineError::InvalidRules {
                mode: self.mode,
                message: "daily_overtime_threshold cannot be negative".to_string(),
            });
        }
        if self.auto_break_threshold < Decimal::ZERO {
            return Err(EngineError::InvalidRules {
                mode: self.mode,
                message: "auto_break_threshold cannot be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Returns true if the night-premium window wraps past midnight.
    pub fn night_window_wraps(&self) -> bool {
        self.night_premium_end < self.night_premium_start
    }
}
