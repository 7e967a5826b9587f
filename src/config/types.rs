//! Configuration file types for payroll rules.
//!
//! This module contains the raw structure deserialized from a rule YAML
//! file and its conversion into the validated [`PayrollRules`] model.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollRules, RuleMode};

/// The raw contents of a rule YAML file.
///
/// Night window times are kept as strings here because the settings form
/// submits them as `HH:MM`; conversion to [`NaiveTime`] happens in
/// [`RuleFileConfig::into_rules`].
#[derive(Debug, Clone, Deserialize)]
pub struct RuleFileConfig {
    /// Hours after which excess hours become overtime.
    pub daily_overtime_threshold: Decimal,
    /// Start of the night-premium window, `HH:MM` or `HH:MM:SS`.
    pub night_premium_start: String,
    /// End of the night-premium window, `HH:MM` or `HH:MM:SS`.
    pub night_premium_end: String,
    /// Gross hours above which the automatic break is deducted.
    pub auto_break_threshold: Decimal,
    /// Minutes deducted when the auto-break threshold is exceeded.
    pub auto_break_duration: u32,
    /// Union-only Sunday override; absent in company files.
    #[serde(default)]
    pub calculate_sundays_as_ot: bool,
    /// Company-only informational field.
    #[serde(default)]
    pub week_start_day: Option<String>,
}

impl RuleFileConfig {
    /// Converts the raw file contents into a validated rule set.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRules`] when a night window time does
    /// not parse or a threshold is negative.
    pub fn into_rules(self, mode: RuleMode) -> EngineResult<PayrollRules> {
        let rules = PayrollRules {
            mode,
            daily_overtime_threshold: self.daily_overtime_threshold,
            night_premium_start: parse_time(&self.night_premium_start, mode)?,
            night_premium_end: parse_time(&self.night_premium_end, mode)?,
            auto_break_threshold: self.auto_break_threshold,
            auto_break_duration: self.auto_break_duration,
            calculate_sundays_as_ot: self.calculate_sundays_as_ot,
            week_start_day: self.week_start_day,
        };
        rules.validate()?;
        Ok(rules)
    }
}

fn parse_time(value: &str, mode: RuleMode) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| EngineError::InvalidRules {
            mode,
            message: format!("invalid night window time '{}'", value),
        })
}
