//! Effective hourly rate resolution.
//!
//! This module resolves the rate to pay for a shift: a position-specific
//! override matching the shift's role wins over the employee's base rate,
//! which wins over nothing. Resolution is an input-preparation step invoked
//! immediately before the payroll computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, Employee};

/// Where the resolved rate came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// A position-specific override matched the shift's role.
    PositionOverride,
    /// The employee's base rate.
    BaseRate,
    /// No rate on file; pay will compute as zero for this component.
    Missing,
}

/// The result of resolving an employee's effective hourly rate for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResolution {
    /// The resolved rate, if any rate was on file.
    pub rate: Option<Decimal>,
    /// Where the rate came from.
    pub source: RateSource,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

impl RateResolution {
    /// The rate to feed the engine: the resolved rate, or zero when missing.
    pub fn effective(&self) -> Decimal {
        self.rate.unwrap_or(Decimal::ZERO)
    }
}

/// Resolves the effective hourly rate for an employee working a given role.
///
/// The shift's role and each linked position name are normalized with trim
/// and lowercase before comparison. The first exact match carrying a
/// non-null override rate wins; otherwise the employee's base rate applies;
/// otherwise the result is [`RateSource::Missing`] and the effective rate
/// is zero.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::{RateSource, resolve_rate};
/// use timecard_engine::models::{Employee, PositionLink};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     full_name: "Dana Reyes".to_string(),
///     base_rate: Some(Decimal::from_str("20.00").unwrap()),
///     positions: vec![PositionLink {
///         name: "Electrician".to_string(),
///         rate: Some(Decimal::from_str("35.00").unwrap()),
///     }],
/// };
///
/// let resolution = resolve_rate(&employee, "electrician", 1);
/// assert_eq!(resolution.source, RateSource::PositionOverride);
/// assert_eq!(resolution.effective(), Decimal::from_str("35.00").unwrap());
/// ```
pub fn resolve_rate(employee: &Employee, role: &str, step_number: u32) -> RateResolution {
    let normalized_role = role.trim().to_lowercase();

    let override_rate = employee
        .positions
        .iter()
        .find(|p| p.name.trim().to_lowercase() == normalized_role && p.rate.is_some())
        .and_then(|p| p.rate);

    let (rate, source, reasoning) = if let Some(rate) = override_rate {
        (
            Some(rate),
            RateSource::PositionOverride,
            format!(
                "Position override ${} matched role '{}'",
                rate.normalize(),
                role.trim()
            ),
        )
    } else if let Some(base) = employee.base_rate {
        (
            Some(base),
            RateSource::BaseRate,
            format!(
                "No position override for role '{}', using base rate ${}",
                role.trim(),
                base.normalize()
            ),
        )
    } else {
        (
            None,
            RateSource::Missing,
            format!(
                "No rate on file for employee '{}', defaulting to 0",
                employee.id
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_resolution".to_string(),
        rule_name: "Rate Resolution".to_string(),
        input: serde_json::json!({
            "employee_id": employee.id,
            "role": role,
            "base_rate": employee.base_rate.map(|r| r.normalize().to_string()),
            "position_count": employee.positions.len()
        }),
        output: serde_json::json!({
            "rate": rate.map(|r| r.normalize().to_string()),
            "source": match source {
                RateSource::PositionOverride => "position_override",
                RateSource::BaseRate => "base_rate",
                RateSource::Missing => "missing",
            }
        }),
        reasoning,
    };

    RateResolution {
        rate,
        source,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PositionLink;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(base: Option<&str>, positions: Vec<(&str, Option<&str>)>) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            full_name: "Dana Reyes".to_string(),
            base_rate: base.map(dec),
            positions: positions
                .into_iter()
                .map(|(name, rate)| PositionLink {
                    name: name.to_string(),
                    rate: rate.map(dec),
                })
                .collect(),
        }
    }

    /// RR-001: position override beats base rate, case-insensitively
    #[test]
    fn test_rr_001_override_beats_base_case_insensitive() {
        let emp = employee(Some("20.00"), vec![("Electrician", Some("35.00"))]);

        let resolution = resolve_rate(&emp, "electrician", 1);
        assert_eq!(resolution.source, RateSource::PositionOverride);
        assert_eq!(resolution.effective(), dec("35.00"));
    }

    /// RR-002: non-matching role falls back to base rate
    #[test]
    fn test_rr_002_other_role_uses_base() {
        let emp = employee(Some("20.00"), vec![("Electrician", Some("35.00"))]);

        let resolution = resolve_rate(&emp, "Stagehand", 1);
        assert_eq!(resolution.source, RateSource::BaseRate);
        assert_eq!(resolution.effective(), dec("20.00"));
    }

    /// RR-003: no rates anywhere resolves to missing/zero
    #[test]
    fn test_rr_003_missing_rate_is_zero() {
        let emp = employee(None, vec![("Electrician", None)]);

        let resolution = resolve_rate(&emp, "Electrician", 1);
        assert_eq!(resolution.source, RateSource::Missing);
        assert_eq!(resolution.rate, None);
        assert_eq!(resolution.effective(), Decimal::ZERO);
    }

    /// RR-004: whitespace around names is ignored
    #[test]
    fn test_rr_004_trims_whitespace() {
        let emp = employee(Some("20.00"), vec![("  Audio Tech ", Some("28.00"))]);

        let resolution = resolve_rate(&emp, " audio tech", 1);
        assert_eq!(resolution.source, RateSource::PositionOverride);
        assert_eq!(resolution.effective(), dec("28.00"));
    }

    /// RR-005: a matching position with no override falls through to base
    #[test]
    fn test_rr_005_null_override_falls_through() {
        let emp = employee(Some("22.00"), vec![("Rigger", None)]);

        let resolution = resolve_rate(&emp, "Rigger", 1);
        assert_eq!(resolution.source, RateSource::BaseRate);
        assert_eq!(resolution.effective(), dec("22.00"));
    }

    /// RR-006: first matching override wins
    #[test]
    fn test_rr_006_first_match_wins() {
        let emp = employee(
            Some("20.00"),
            vec![("Rigger", Some("30.00")), ("rigger", Some("40.00"))],
        );

        let resolution = resolve_rate(&emp, "RIGGER", 1);
        assert_eq!(resolution.effective(), dec("30.00"));
    }

    #[test]
    fn test_audit_step_records_source() {
        let emp = employee(Some("20.00"), vec![]);

        let resolution = resolve_rate(&emp, "Stagehand", 7);
        assert_eq!(resolution.audit_step.step_number, 7);
        assert_eq!(resolution.audit_step.rule_id, "rate_resolution");
        assert_eq!(
            resolution.audit_step.output["source"].as_str().unwrap(),
            "base_rate"
        );
    }
}
