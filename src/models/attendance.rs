//! Attendance model.
//!
//! This module defines the [`AttendanceEntry`] struct, one entry per worked
//! shift or day in an employee's attendance log.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single entry in an employee's attendance log.
///
/// An entry is opened by clocking in and completed by clocking out; an open
/// entry has no `time_out` yet. The shift fields snapshot the rostered shift
/// at clock-in time so later policy changes do not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The instant the employee clocked in.
    pub time_in: DateTime<Utc>,
    /// The instant the employee clocked out, if the entry is complete.
    #[serde(default)]
    pub time_out: Option<DateTime<Utc>>,
    /// The label of the rostered shift (e.g. "day", "night").
    pub shift: String,
    /// The rostered duration of the shift in hours.
    pub shift_duration_hours: Decimal,
    /// The rostered start time of the shift.
    pub shift_start_time: NaiveTime,
    /// The rostered end time of the shift.
    pub shift_end_time: NaiveTime,
    /// Whether the employee was present for the shift.
    pub present: bool,
}

impl AttendanceEntry {
    /// Opens an entry with `time_in` stamped at the current instant.
    pub fn clock_in(
        shift: String,
        shift_start_time: NaiveTime,
        shift_end_time: NaiveTime,
        shift_duration_hours: Decimal,
    ) -> Self {
        Self::clock_in_at(
            Utc::now(),
            shift,
            shift_start_time,
            shift_end_time,
            shift_duration_hours,
        )
    }

    /// Opens an entry with `time_in` stamped at an explicit instant.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{NaiveTime, TimeZone, Utc};
    /// use rust_decimal::Decimal;
    /// use workforce_registry::models::AttendanceEntry;
    ///
    /// let entry = AttendanceEntry::clock_in_at(
    ///     Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap(),
    ///     "day".to_string(),
    ///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    ///     Decimal::new(80, 1),
    /// );
    /// assert!(entry.is_open());
    /// assert!(entry.present);
    /// ```
    pub fn clock_in_at(
        at: DateTime<Utc>,
        shift: String,
        shift_start_time: NaiveTime,
        shift_end_time: NaiveTime,
        shift_duration_hours: Decimal,
    ) -> Self {
        Self {
            time_in: at,
            time_out: None,
            shift,
            shift_duration_hours,
            shift_start_time,
            shift_end_time,
            present: true,
        }
    }

    /// Completes the entry at the current instant.
    pub fn clock_out(&mut self) {
        self.clock_out_at(Utc::now());
    }

    /// Completes the entry at an explicit instant.
    pub fn clock_out_at(&mut self, at: DateTime<Utc>) {
        self.time_out = Some(at);
    }

    /// Returns true while the entry has no clock-out instant.
    pub fn is_open(&self) -> bool {
        self.time_out.is_none()
    }

    /// Calculates the hours between clock-in and clock-out.
    ///
    /// Returns `None` while the entry is still open. The result has
    /// whole-minute resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{NaiveTime, TimeZone, Utc};
    /// use rust_decimal::Decimal;
    /// use workforce_registry::models::AttendanceEntry;
    ///
    /// let mut entry = AttendanceEntry::clock_in_at(
    ///     Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap(),
    ///     "day".to_string(),
    ///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    ///     Decimal::new(80, 1),
    /// );
    /// entry.clock_out_at(Utc.with_ymd_and_hms(2025, 3, 7, 17, 0, 0).unwrap());
    /// assert_eq!(entry.worked_hours(), Some(Decimal::new(80, 1))); // 8.0 hours
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        let time_out = self.time_out?;
        let worked_minutes = (time_out - self.time_in).num_minutes();
        Some(Decimal::new(worked_minutes, 0) / Decimal::new(60, 0))
    }
}
