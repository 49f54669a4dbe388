//! Orbitway Booking Engine
//!
//! Platform-agnostic core logic for the Orbitway space-travel booking
//! form. This crate provides pricing, validation, readiness, and
//! booking-record handling without UI or platform-specific
//! dependencies.

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod constants;
pub mod departure;
pub mod passenger;
pub mod quote;
pub mod readiness;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use auth::{AuthState, CredentialStatus, LoginCheck, UserRecord, UsersList};
pub use booking::{BookingRecord, generate_reference, reference_from_entropy};
pub use catalog::{Accommodation, Catalog, CatalogError, DeparturePort, Destination};
pub use constants::{HAZARDOUS_DESTINATIONS, INSURANCE_SURCHARGE};
pub use departure::{DepartureDateError, check_departure, parse_date_input};
pub use passenger::{Passenger, PassengerRoster};
pub use quote::{PassengerBand, Quote, QuoteOutcome, Selection, compute_quote};
pub use readiness::{SubmitReadiness, submit_readiness};
pub use session::{BookingSession, CardStatuses, SubmitError};
pub use validation::{FieldError, FieldStatus, PassengerField, validate_field};

/// Trait for abstracting reference-data loading.
/// Platform-specific implementations should provide this.
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the catalog from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if any reference document cannot be loaded or
    /// parsed. Callers treat this as fatal to form initialization.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load the static user records for the login check.
    ///
    /// # Errors
    ///
    /// Returns an error if the user document cannot be loaded or
    /// parsed.
    fn load_users(&self) -> Result<UsersList, Self::Error>;
}

/// Trait for abstracting the device-local booking store.
/// Platform-specific implementations should provide this.
pub trait BookingStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append one confirmed booking to the log.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted.
    fn append_booking(&self, record: &BookingRecord) -> Result<(), Self::Error>;

    /// All bookings recorded on this device, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    fn list_bookings(&self) -> Result<Vec<BookingRecord>, Self::Error>;

    /// Park a guest booking until the visitor logs in.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted.
    fn save_pending(&self, record: &BookingRecord) -> Result<(), Self::Error>;

    /// Remove and return the parked booking, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or cleared.
    fn take_pending(&self) -> Result<Option<BookingRecord>, Self::Error>;
}

/// Engine facade binding a catalog source to a booking store.
pub struct BookingEngine<C, S>
where
    C: CatalogSource,
    S: BookingStore,
{
    source: C,
    store: S,
}

impl<C, S> BookingEngine<C, S>
where
    C: CatalogSource,
    S: BookingStore,
{
    /// Create a new engine with the provided source and store.
    pub const fn new(source: C, store: S) -> Self {
        Self { source, store }
    }

    /// Load the catalog and open a fresh booking session over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded; the form must
    /// not initialize in that case.
    pub fn start_session(&self) -> Result<BookingSession, C::Error> {
        let catalog = self.source.load_catalog()?;
        Ok(BookingSession::new(catalog))
    }

    /// Build the login check bound to the stored user records.
    ///
    /// # Errors
    ///
    /// Returns an error if the user document cannot be loaded.
    pub fn login_check(&self) -> Result<LoginCheck, C::Error> {
        Ok(LoginCheck::new(&self.source.load_users()?))
    }

    /// Append a confirmed booking to the device-local log.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted.
    pub fn record_booking(&self, record: &BookingRecord) -> Result<(), S::Error> {
        self.store.append_booking(record)
    }

    /// All bookings recorded on this device.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    pub fn bookings(&self) -> Result<Vec<BookingRecord>, S::Error> {
        self.store.list_bookings()
    }

    /// Park a booking made before login.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted.
    pub fn park_pending(&self, record: &BookingRecord) -> Result<(), S::Error> {
        self.store.save_pending(record)
    }

    /// Claim the booking parked before login: clears its guest flag
    /// and appends it to the log. Returns the claimed record, if one
    /// was waiting.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn claim_pending(&self) -> Result<Option<BookingRecord>, S::Error> {
        let Some(mut record) = self.store.take_pending()? else {
            return Ok(None);
        };
        record.guest = false;
        self.store.append_booking(&record)?;
        Ok(Some(record))
    }

    /// Load everything a fresh page session needs in one shot: the
    /// session, the login records, and the existing booking log.
    ///
    /// # Errors
    ///
    /// Returns an error if either the source or the store fails.
    pub fn bootstrap(
        &self,
    ) -> Result<(BookingSession, UsersList, Vec<BookingRecord>), anyhow::Error>
    where
        C::Error: Into<anyhow::Error>,
        S::Error: Into<anyhow::Error>,
    {
        let session = self.start_session().map_err(Into::into)?;
        let users = self.source.load_users().map_err(Into::into)?;
        let bookings = self.store.list_bookings().map_err(Into::into)?;
        Ok((session, users, bookings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Copy, Default)]
    struct FixtureSource;

    impl CatalogSource for FixtureSource {
        type Error = Infallible;

        fn load_catalog(&self) -> Result<Catalog, Self::Error> {
            Ok(Catalog::from_json(
                r#"{"destinations": [
                    {"id": "europa", "name": "Europa", "price": 80000,
                     "travelDuration": "10 days"}
                ]}"#,
                r#"{"accommodations": [
                    {"id": "ice-lodge", "name": "Ice Lodge", "pricePerDay": 500,
                     "availableOn": ["europa"]}
                ]}"#,
                None,
            )
            .unwrap_or_default())
        }

        fn load_users(&self) -> Result<UsersList, Self::Error> {
            Ok(UsersList::from_json(
                r#"[{"username": "Adnane", "email": "adnane@orbitway.space",
                     "password": "ad astra"}]"#,
            )
            .unwrap_or_default())
        }
    }

    #[derive(Clone, Default)]
    struct MemoryStore {
        log: Rc<RefCell<Vec<BookingRecord>>>,
        pending: Rc<RefCell<Option<BookingRecord>>>,
    }

    impl BookingStore for MemoryStore {
        type Error = Infallible;

        fn append_booking(&self, record: &BookingRecord) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(record.clone());
            Ok(())
        }

        fn list_bookings(&self) -> Result<Vec<BookingRecord>, Self::Error> {
            Ok(self.log.borrow().clone())
        }

        fn save_pending(&self, record: &BookingRecord) -> Result<(), Self::Error> {
            *self.pending.borrow_mut() = Some(record.clone());
            Ok(())
        }

        fn take_pending(&self) -> Result<Option<BookingRecord>, Self::Error> {
            Ok(self.pending.borrow_mut().take())
        }
    }

    fn submitted_record(engine: &BookingEngine<FixtureSource, MemoryStore>) -> BookingRecord {
        let mut session = engine.start_session().unwrap();
        session.select_destination("europa");
        session.select_band(PassengerBand::Group);
        session.set_departure_date("2026-08-20");
        for seat in 0..3 {
            session.edit_field(seat, PassengerField::FirstName, "Ada");
            session.edit_field(seat, PassengerField::LastName, "Lovelace");
            session.edit_field(seat, PassengerField::Email, "ada@moon.base");
        }
        session
            .submit(
                NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
                DateTime::<Utc>::MIN_UTC,
                99,
            )
            .unwrap()
    }

    #[test]
    fn engine_session_submit_and_log_roundtrip() {
        let engine = BookingEngine::new(FixtureSource, MemoryStore::default());
        let record = submitted_record(&engine);
        assert_eq!(record.total_price, 505_000);
        assert!(record.insurance_enabled);

        engine.record_booking(&record).unwrap();
        let log = engine.bookings().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], record);
    }

    #[test]
    fn pending_booking_is_claimed_after_login() {
        let engine = BookingEngine::new(FixtureSource, MemoryStore::default());
        let mut record = submitted_record(&engine);
        record.guest = true;
        engine.park_pending(&record).unwrap();
        assert!(engine.bookings().unwrap().is_empty());

        let claimed = engine.claim_pending().unwrap().expect("pending exists");
        assert!(!claimed.guest);
        assert_eq!(engine.bookings().unwrap().len(), 1);
        // A second claim finds nothing.
        assert!(engine.claim_pending().unwrap().is_none());
    }

    #[test]
    fn bootstrap_loads_session_users_and_log() {
        let engine = BookingEngine::new(FixtureSource, MemoryStore::default());
        let (session, users, bookings) = engine.bootstrap().unwrap();
        assert!(session.catalog().is_ready());
        assert_eq!(users.primary().unwrap().username, "Adnane");
        assert!(bookings.is_empty());

        let check = engine.login_check().unwrap();
        assert_eq!(check.username(), "Adnane");
    }
}
