//! Booking session state: the single explicit object behind the form.
//!
//! Replaces the source page's ambient module-level mutables and DOM
//! queries. Every UI event funnels through a mutator here; quote,
//! per-field validity, and readiness are derived on demand from this
//! state and nothing else.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::booking::{BookingRecord, reference_from_entropy};
use crate::catalog::{Accommodation, Catalog, Destination};
use crate::departure::{DepartureDateError, check_departure, parse_date_input};
use crate::passenger::PassengerRoster;
use crate::quote::{PassengerBand, QuoteOutcome, Selection, compute_quote};
use crate::readiness::{SubmitReadiness, submit_readiness};
use crate::validation::{FieldStatus, PassengerField, validate_field};

/// Display statuses for the four fields of one passenger card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardStatuses {
    pub first_name: FieldStatus,
    pub last_name: FieldStatus,
    pub email: FieldStatus,
    pub phone: FieldStatus,
}

impl CardStatuses {
    #[must_use]
    pub const fn get(self, field: PassengerField) -> FieldStatus {
        match field {
            PassengerField::FirstName => self.first_name,
            PassengerField::LastName => self.last_name,
            PassengerField::Email => self.email,
            PassengerField::Phone => self.phone,
        }
    }

    pub fn set(&mut self, field: PassengerField, status: FieldStatus) {
        let slot = match field {
            PassengerField::FirstName => &mut self.first_name,
            PassengerField::LastName => &mut self.last_name,
            PassengerField::Email => &mut self.email,
            PassengerField::Phone => &mut self.phone,
        };
        *slot = status;
    }

    #[must_use]
    pub const fn any_invalid(self) -> bool {
        self.first_name.is_invalid()
            || self.last_name.is_invalid()
            || self.email.is_invalid()
            || self.phone.is_invalid()
    }
}

/// Why a submit attempt was refused. The `Display` text is the single
/// blocking message shown to the user; tests query the individual
/// rules through the session instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please fix the departure date")]
    Departure(#[source] DepartureDateError),
    #[error("Please fix all errors before submitting")]
    InvalidFields,
    #[error("Not all booking requirements are met")]
    Incomplete,
}

/// Mutable state for one visitor's pass through the booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSession {
    catalog: Catalog,
    selection: Selection,
    roster: PassengerRoster,
    statuses: Vec<CardStatuses>,
    departure_raw: String,
    departure_port_id: Option<String>,
}

impl BookingSession {
    /// Fresh session over a loaded catalog: one blank passenger card,
    /// nothing selected, insurance armed.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
            roster: PassengerRoster::solo(),
            statuses: vec![CardStatuses::default()],
            departure_raw: String::new(),
            departure_port_id: None,
        }
    }

    // --- mutators, one per UI event -------------------------------------

    /// Destination change: clears the accommodation choice, auto-selects
    /// the first one available on the new destination (as the source
    /// page did), re-arms the insurance default, and keeps the roster
    /// reconciled.
    pub fn select_destination(&mut self, id: &str) {
        if self.catalog.destination(id).is_some() {
            self.selection.destination_id = Some(id.to_string());
            self.selection.accommodation_id = self
                .catalog
                .accommodations_for(id)
                .first()
                .map(|a| a.id.clone());
        } else {
            self.selection.destination_id = None;
            self.selection.accommodation_id = None;
        }
        self.selection.insurance_enabled = true;
        if let Some(band) = self.selection.band {
            self.reconcile_seats(band);
        }
    }

    /// Ignores ids that are unknown or not offered on the current
    /// destination; the form never lists those.
    pub fn select_accommodation(&mut self, id: &str) {
        let valid = match self.selection.destination_id.as_deref() {
            Some(dest) => self
                .catalog
                .accommodation(id)
                .is_some_and(|a| a.is_available_on(dest)),
            None => false,
        };
        if valid {
            self.selection.accommodation_id = Some(id.to_string());
        }
    }

    pub fn select_band(&mut self, band: PassengerBand) {
        self.selection.band = Some(band);
        self.reconcile_seats(band);
    }

    pub fn select_port(&mut self, id: &str) {
        self.departure_port_id = self.catalog.port(id).map(|p| p.id.clone());
    }

    pub fn set_departure_date(&mut self, raw: &str) {
        self.departure_raw = raw.trim().to_string();
    }

    pub fn set_insurance(&mut self, enabled: bool) {
        self.selection.insurance_enabled = enabled;
    }

    /// Field edit: stores the value and refreshes that field's display
    /// status. Other fields are untouched.
    pub fn edit_field(&mut self, seat: usize, field: PassengerField, value: &str) {
        if let Some(passenger) = self.roster.get_mut(seat) {
            passenger.set_field(field, value);
            if let Some(card) = self.statuses.get_mut(seat) {
                card.set(field, validate_field(field, value));
            }
        }
    }

    fn reconcile_seats(&mut self, band: PassengerBand) {
        self.roster.reconcile(band);
        self.statuses
            .resize(band.priced_count() as usize, CardStatuses::default());
    }

    // --- derived views ---------------------------------------------------

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn roster(&self) -> &PassengerRoster {
        &self.roster
    }

    #[must_use]
    pub fn destination(&self) -> Option<&Destination> {
        self.selection
            .destination_id
            .as_deref()
            .and_then(|id| self.catalog.destination(id))
    }

    /// Accommodations offered for the current destination; empty when
    /// none is selected or none apply.
    #[must_use]
    pub fn available_accommodations(&self) -> Vec<&Accommodation> {
        self.selection
            .destination_id
            .as_deref()
            .map(|id| self.catalog.accommodations_for(id))
            .unwrap_or_default()
    }

    /// Whether the accommodation section is shown at all.
    #[must_use]
    pub fn accommodation_applicable(&self) -> bool {
        !self.available_accommodations().is_empty()
    }

    /// Whether the insurance option is shown (hazardous destinations).
    #[must_use]
    pub fn insurance_applicable(&self) -> bool {
        self.destination().is_some_and(Destination::hazardous)
    }

    #[must_use]
    pub fn field_status(&self, seat: usize, field: PassengerField) -> FieldStatus {
        self.statuses
            .get(seat)
            .map(|card| card.get(field))
            .unwrap_or_default()
    }

    /// All four statuses for one card.
    #[must_use]
    pub fn field_statuses(&self, seat: usize) -> CardStatuses {
        self.statuses.get(seat).copied().unwrap_or_default()
    }

    /// True if any field on any card currently displays an error.
    #[must_use]
    pub fn any_field_invalid(&self) -> bool {
        self.statuses.iter().any(|card| card.any_invalid())
    }

    #[must_use]
    pub fn departure_entered(&self) -> bool {
        !self.departure_raw.is_empty()
    }

    /// Raw value of the date input, for re-rendering it.
    #[must_use]
    pub fn departure_input(&self) -> &str {
        &self.departure_raw
    }

    #[must_use]
    pub fn departure_date(&self) -> Option<NaiveDate> {
        parse_date_input(&self.departure_raw)
    }

    #[must_use]
    pub fn departure_port_id(&self) -> Option<&str> {
        self.departure_port_id.as_deref()
    }

    /// The date rule, evaluated against an injected `today`.
    ///
    /// # Errors
    ///
    /// Returns the single applicable [`DepartureDateError`].
    pub fn departure_status(&self, today: NaiveDate) -> Result<(), DepartureDateError> {
        check_departure(self.departure_date(), today)
    }

    /// Price the current selection. Pure; recomputed from scratch.
    #[must_use]
    pub fn quote(&self) -> QuoteOutcome {
        compute_quote(&self.selection, &self.catalog)
    }

    #[must_use]
    pub fn readiness(&self) -> SubmitReadiness {
        submit_readiness(self)
    }

    // --- submission ------------------------------------------------------

    /// Re-validate everything and emit the record to persist. The quote
    /// is computed once here and reused for the stored total; callers
    /// must not price it again.
    ///
    /// # Errors
    ///
    /// Returns the blocking [`SubmitError`] when the departure date
    /// fails its rule, any field fails full validation (including
    /// required fields never touched), or the selection is incomplete.
    pub fn submit(
        &self,
        today: NaiveDate,
        now: DateTime<Utc>,
        entropy: u64,
    ) -> Result<BookingRecord, SubmitError> {
        check_departure(self.departure_date(), today).map_err(SubmitError::Departure)?;
        let Some(departure_date) = self.departure_date() else {
            return Err(SubmitError::Departure(DepartureDateError::Missing));
        };

        let all_fields_pass = self.roster.iter().all(|passenger| {
            PassengerField::ALL
                .iter()
                .all(|&field| !validate_field(field, passenger.field(field)).is_invalid())
        });
        if !all_fields_pass {
            return Err(SubmitError::InvalidFields);
        }

        let QuoteOutcome::Priced(quote) = self.quote() else {
            return Err(SubmitError::Incomplete);
        };
        let (Some(destination), Some(accommodation)) = (
            self.selection.destination_id.clone(),
            self.selection.accommodation_id.clone(),
        ) else {
            return Err(SubmitError::Incomplete);
        };

        Ok(BookingRecord {
            id: reference_from_entropy(entropy),
            destination,
            accommodation,
            passengers: self.roster.to_vec(),
            departure_date,
            total_passengers: quote.passenger_count,
            insurance_enabled: quote.insurance_surcharge > 0,
            total_price: quote.total_price,
            created_at: now,
            guest: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;
    use chrono::Duration;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"destinations": [
                {"id": "mars", "name": "Mars", "price": 50000,
                 "travelDuration": "6 months (180 days)"},
                {"id": "europa", "name": "Europa", "price": 80000,
                 "travelDuration": "10 days"},
                {"id": "titan", "name": "Titan", "price": 120000,
                 "travelDuration": "2 years"}
            ]}"#,
            r#"{"accommodations": [
                {"id": "dome", "name": "Habitat Dome", "pricePerDay": 200,
                 "availableOn": ["mars", "europa"]},
                {"id": "ice-lodge", "name": "Ice Lodge", "pricePerDay": 500,
                 "availableOn": ["europa"]}
            ]}"#,
            Some(r#"{"ports": [{"id": "ksc", "name": "Cape Canaveral"}]}"#),
        )
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn filled_session() -> BookingSession {
        let mut session = BookingSession::new(catalog());
        session.select_destination("mars");
        session.select_band(PassengerBand::Pair);
        session.set_departure_date("2026-08-20");
        session.set_insurance(false);
        for seat in 0..2 {
            session.edit_field(seat, PassengerField::FirstName, "Ada");
            session.edit_field(seat, PassengerField::LastName, "Lovelace");
            session.edit_field(seat, PassengerField::Email, "ada@moon.base");
        }
        session
    }

    #[test]
    fn destination_change_auto_selects_first_accommodation() {
        let mut session = BookingSession::new(catalog());
        session.select_destination("europa");
        assert_eq!(
            session.selection().accommodation_id.as_deref(),
            Some("dome")
        );

        session.select_accommodation("ice-lodge");
        assert_eq!(
            session.selection().accommodation_id.as_deref(),
            Some("ice-lodge")
        );

        // Titan offers nothing; the section disappears.
        session.select_destination("titan");
        assert_eq!(session.selection().accommodation_id, None);
        assert!(!session.accommodation_applicable());
    }

    #[test]
    fn destination_change_re_arms_insurance_default() {
        let mut session = BookingSession::new(catalog());
        session.select_destination("europa");
        session.set_insurance(false);
        session.select_destination("titan");
        assert!(session.selection().insurance_enabled);
        assert!(session.insurance_applicable());
        session.select_destination("mars");
        assert!(!session.insurance_applicable());
    }

    #[test]
    fn accommodation_not_offered_on_destination_is_rejected() {
        let mut session = BookingSession::new(catalog());
        session.select_destination("mars");
        session.select_accommodation("ice-lodge");
        // Still the auto-selected dome: Ice Lodge is Europa-only.
        assert_eq!(
            session.selection().accommodation_id.as_deref(),
            Some("dome")
        );
    }

    #[test]
    fn field_edits_drive_tri_state_feedback() {
        let mut session = BookingSession::new(catalog());
        assert_eq!(
            session.field_status(0, PassengerField::FirstName),
            FieldStatus::Empty
        );
        session.edit_field(0, PassengerField::FirstName, "Al3x");
        assert_eq!(
            session.field_status(0, PassengerField::FirstName),
            FieldStatus::Invalid(FieldError::BadName)
        );
        assert!(session.any_field_invalid());
        session.edit_field(0, PassengerField::FirstName, "Alex");
        assert_eq!(
            session.field_status(0, PassengerField::FirstName),
            FieldStatus::Valid
        );
        assert!(!session.any_field_invalid());
    }

    #[test]
    fn band_change_reconciles_cards_and_statuses() {
        let mut session = BookingSession::new(catalog());
        session.select_band(PassengerBand::Group);
        assert_eq!(session.roster().len(), 3);
        session.edit_field(2, PassengerField::Email, "bad");
        session.select_band(PassengerBand::Solo);
        assert_eq!(session.roster().len(), 1);
        // The invalid third card is gone, so nothing is invalid now.
        assert!(!session.any_field_invalid());
    }

    #[test]
    fn submit_produces_the_record_from_one_quote() {
        let session = filled_session();
        let record = session
            .submit(today(), DateTime::<Utc>::MIN_UTC, 42)
            .unwrap();
        assert_eq!(record.destination, "mars");
        assert_eq!(record.accommodation, "dome");
        assert_eq!(record.total_passengers, 2);
        assert_eq!(record.total_price, 202_400);
        assert!(!record.insurance_enabled);
        assert!(!record.guest);
        assert_eq!(record.passengers.len(), 2);
        assert_eq!(record.id, reference_from_entropy(42));
    }

    #[test]
    fn submit_blocks_on_departure_date_first() {
        let mut session = filled_session();
        session.set_departure_date("");
        assert_eq!(
            session.submit(today(), DateTime::<Utc>::MIN_UTC, 0),
            Err(SubmitError::Departure(DepartureDateError::Missing))
        );
        session.set_departure_date(
            &(today() + Duration::days(31)).format("%Y-%m-%d").to_string(),
        );
        assert_eq!(
            session.submit(today(), DateTime::<Utc>::MIN_UTC, 0),
            Err(SubmitError::Departure(DepartureDateError::TooFarAhead))
        );
    }

    #[test]
    fn submit_blocks_on_untouched_required_fields() {
        let mut session = BookingSession::new(catalog());
        session.select_destination("mars");
        session.select_band(PassengerBand::Solo);
        session.set_departure_date("2026-08-20");
        // Fields never touched: readiness shows no error, submit still
        // refuses.
        assert!(!session.any_field_invalid());
        assert_eq!(
            session.submit(today(), DateTime::<Utc>::MIN_UTC, 0),
            Err(SubmitError::InvalidFields)
        );
    }

    #[test]
    fn submit_blocks_on_incomplete_selection() {
        let mut session = BookingSession::new(catalog());
        session.set_departure_date("2026-08-20");
        session.edit_field(0, PassengerField::FirstName, "Ada");
        session.edit_field(0, PassengerField::LastName, "Lovelace");
        session.edit_field(0, PassengerField::Email, "ada@moon.base");
        assert_eq!(
            session.submit(today(), DateTime::<Utc>::MIN_UTC, 0),
            Err(SubmitError::Incomplete)
        );
    }
}
