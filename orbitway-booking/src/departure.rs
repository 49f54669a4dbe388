//! Departure-date rule: present, not in the past, at most 30 days out.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::MAX_ADVANCE_DAYS;

/// Why the departure date is rejected. Exactly one of these surfaces
/// at a time; the `Display` text is the inline error copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DepartureDateError {
    #[error("Please select a departure date")]
    Missing,
    #[error("Date must be in the future")]
    InPast,
    #[error("Booking max 30 days in advance")]
    TooFarAhead,
}

/// Check a departure date against the booking window. `today` is
/// injected by the caller so the rule stays pure; time-of-day plays no
/// part in the comparison. Today and `today + 30` are both accepted.
///
/// # Errors
///
/// Returns the single applicable [`DepartureDateError`].
pub fn check_departure(
    date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), DepartureDateError> {
    let Some(date) = date else {
        return Err(DepartureDateError::Missing);
    };
    if date < today {
        return Err(DepartureDateError::InPast);
    }
    if date > today + Duration::days(MAX_ADVANCE_DAYS) {
        return Err(DepartureDateError::TooFarAhead);
    }
    Ok(())
}

/// Parse the raw value of a date input (`YYYY-MM-DD`); empty or
/// malformed input counts as no date.
#[must_use]
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
