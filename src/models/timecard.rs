//! Timecard entry model and lifecycle.
//!
//! A timecard entry records one employee's clock events for one shift and,
//! once computed, the derived hour and pay fields. The engine itself never
//! creates or destroys entries; the entry's owner (the clock-out handler or
//! the approval screen) invokes the engine and writes the result back here.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::PayrollBreakdown;

/// Lifecycle state of a timecard entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimecardStatus {
    /// The employee has clocked in and the shift is in progress.
    ClockedIn,
    /// A manually entered timecard not yet submitted for review.
    Draft,
    /// Submitted and awaiting reviewer action.
    Pending,
    /// Approved; the persisted hour/pay fields are authoritative.
    Approved,
    /// Rejected by a reviewer, with notes.
    Rejected,
}

/// A single timecard entry for one `(shift, employee)` pair.
///
/// That pair is the natural upsert key: a worker clocking out and a manager
/// entering times manually must land on the same record, never a duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardEntry {
    /// Unique identifier for this entry.
    pub id: Uuid,
    /// The shift this entry belongs to.
    pub shift_id: String,
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// When the employee clocked in.
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out. Absent while the shift is in progress.
    pub clock_out: Option<NaiveDateTime>,
    /// Lifecycle state.
    pub status: TimecardStatus,
    /// Minutes deducted by the auto-break rule.
    pub break_duration_minutes: u32,
    /// Net worked hours after break deduction.
    pub total_hours: Option<Decimal>,
    /// Hours at base rate.
    pub regular_hours: Option<Decimal>,
    /// Hours at the 1.5x overtime rate.
    pub overtime_hours: Option<Decimal>,
    /// Hours falling within the night-premium window (informational).
    pub night_premium_hours: Option<Decimal>,
    /// Total pay owed, persisted on approval.
    pub total_pay: Option<Decimal>,
    /// True when the computed pay relied on a zero-defaulted money input.
    pub low_confidence: bool,
    /// Reviewer notes, required on rejection.
    pub manager_notes: Option<String>,
}

impl TimecardEntry {
    /// Creates a new entry at clock-in time.
    pub fn clock_in(shift_id: &str, employee_id: &str, at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            shift_id: shift_id.to_string(),
            employee_id: employee_id.to_string(),
            clock_in: at,
            clock_out: None,
            status: TimecardStatus::ClockedIn,
            break_duration_minutes: 0,
            total_hours: None,
            regular_hours: None,
            overtime_hours: None,
            night_premium_hours: None,
            total_pay: None,
            low_confidence: false,
            manager_notes: None,
        }
    }

    /// Creates a manually entered draft with both clock events present.
    pub fn manual(
        shift_id: &str,
        employee_id: &str,
        clock_in: NaiveDateTime,
        clock_out: NaiveDateTime,
    ) -> Self {
        let mut entry = Self::clock_in(shift_id, employee_id, clock_in);
        entry.clock_out = Some(clock_out);
        entry.status = TimecardStatus::Draft;
        entry
    }

    /// The upsert key for the persistence layer.
    pub fn upsert_key(&self) -> (&str, &str) {
        (&self.shift_id, &self.employee_id)
    }

    /// Submits the entry for review, recording the clock-out time and the
    /// computed breakdown.
    ///
    /// Valid from `ClockedIn` (clock-out flow) and `Draft` (manual entry).
    /// The caller computes the breakdown with the engine first; this method
    /// only records it and advances the lifecycle.
    pub fn submit(
        &mut self,
        clock_out: NaiveDateTime,
        breakdown: &PayrollBreakdown,
    ) -> EngineResult<()> {
        match self.status {
            TimecardStatus::ClockedIn | TimecardStatus::Draft => {
                self.clock_out = Some(clock_out);
                self.apply_breakdown(breakdown);
                self.status = TimecardStatus::Pending;
                Ok(())
            }
            _ => Err(EngineError::InvalidTimecard {
                entry_id: self.id.to_string(),
                message: "only a clocked-in or draft entry can be submitted".to_string(),
            }),
        }
    }

    /// Approves a pending entry, persisting the freshly recomputed breakdown
    /// as the authoritative record.
    ///
    /// The reviewer's screen recomputes the breakdown rather than trusting
    /// the totals submitted at clock-out; the engine's determinism makes
    /// that recomputation idempotent.
    pub fn approve(&mut self, breakdown: &PayrollBreakdown) -> EngineResult<()> {
        if self.status != TimecardStatus::Pending {
            return Err(EngineError::InvalidTimecard {
                entry_id: self.id.to_string(),
                message: "cannot approve an entry that is not pending".to_string(),
            });
        }
        self.apply_breakdown(breakdown);
        self.status = TimecardStatus::Approved;
        Ok(())
    }

    /// Rejects a pending entry. Notes are required.
    pub fn reject(&mut self, notes: &str) -> EngineResult<()> {
        if self.status != TimecardStatus::Pending {
            return Err(EngineError::InvalidTimecard {
                entry_id: self.id.to_string(),
                message: "cannot reject an entry that is not pending".to_string(),
            });
        }
        if notes.trim().is_empty() {
            return Err(EngineError::InvalidTimecard {
                entry_id: self.id.to_string(),
                message: "rejection notes are required".to_string(),
            });
        }
        self.manager_notes = Some(notes.to_string());
        self.status = TimecardStatus::Rejected;
        Ok(())
    }

    fn apply_breakdown(&mut self, breakdown: &PayrollBreakdown) {
        let rounded = breakdown.rounded();
        self.break_duration_minutes = rounded.break_duration_minutes;
        self.total_hours = Some(rounded.net_total_hours);
        self.regular_hours = Some(rounded.regular_hours);
        self.overtime_hours = Some(rounded.overtime_hours);
        self.night_premium_hours = Some(rounded.night_premium_hours);
        self.total_pay = Some(rounded.total_pay);
        self.low_confidence = rounded.low_confidence;
    }
}
