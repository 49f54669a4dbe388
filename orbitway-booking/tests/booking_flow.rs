use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, Utc};
use orbitway_booking::{
    BookingEngine, BookingRecord, BookingStore, Catalog, CatalogSource, PassengerBand,
    PassengerField, SubmitError, UsersList,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const DESTINATIONS: &str = r#"{"destinations": [
    {"id": "mars", "name": "Mars", "price": 50000,
     "travelDuration": "6 months (180 days)",
     "activities": ["Olympus Mons trek", "Valles Marineris flyover"]},
    {"id": "europa", "name": "Europa", "price": 80000,
     "travelDuration": "10 days"}
]}"#;

const ACCOMMODATIONS: &str = r#"{"accommodations": [
    {"id": "dome", "name": "Habitat Dome", "pricePerDay": 200,
     "availableOn": ["mars"],
     "shortDescription": "Pressurized comfort"},
    {"id": "ice-lodge", "name": "Ice Lodge", "pricePerDay": 500,
     "availableOn": ["europa"]}
]}"#;

const PORTS: &str = r#"{"ports": [
    {"id": "ksc", "name": "Cape Canaveral"},
    {"id": "baikonur", "name": "Baikonur Cosmodrome"}
]}"#;

const USERS: &str = r#"[
    {"username": "Adnane", "email": "adnane@orbitway.space", "password": "ad astra"}
]"#;

#[derive(Clone, Copy, Default)]
struct FixtureSource;

impl CatalogSource for FixtureSource {
    type Error = Infallible;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::from_json(DESTINATIONS, ACCOMMODATIONS, Some(PORTS)).unwrap_or_default())
    }

    fn load_users(&self) -> Result<UsersList, Self::Error> {
        Ok(UsersList::from_json(USERS).unwrap_or_default())
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

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

#[test]
fn full_booking_flow_from_selection_to_log() {
    let engine = BookingEngine::new(FixtureSource, MemoryStore::default());
    let mut session = engine.start_session().unwrap();

    session.select_destination("mars");
    session.select_band(PassengerBand::Pair);
    session.select_port("ksc");
    session.set_departure_date("2026-08-21");
    session.set_insurance(false);
    for (seat, name) in ["Ada", "Grace"].iter().enumerate() {
        session.edit_field(seat, PassengerField::FirstName, name);
        session.edit_field(seat, PassengerField::LastName, "Lovelace");
        session.edit_field(seat, PassengerField::Email, "crew@orbitway.space");
        session.edit_field(seat, PassengerField::Phone, "+1 (555) 123-4567");
    }

    assert!(session.readiness().enabled());
    assert_eq!(session.departure_port_id(), Some("ksc"));

    let mut rng = ChaCha20Rng::seed_from_u64(0xB00C);
    let entropy = rand::RngCore::next_u64(&mut rng);
    let record = session
        .submit(today(), DateTime::<Utc>::MIN_UTC, entropy)
        .unwrap();

    // The stored total is the displayed quote's total: one computation.
    let quote = session.quote().quote().unwrap();
    assert_eq!(record.total_price, quote.total_price);
    assert_eq!(record.total_price, 202_400);
    assert_eq!(record.total_passengers, 2);
    assert_eq!(record.passengers[0].first_name, "Ada");
    assert_eq!(record.passengers[1].first_name, "Grace");
    assert!(record.id.starts_with("OW-"));

    engine.record_booking(&record).unwrap();
    assert_eq!(engine.bookings().unwrap(), vec![record]);
}

#[test]
fn invalid_field_disables_readiness_and_blocks_submit() {
    let engine = BookingEngine::new(FixtureSource, MemoryStore::default());
    let mut session = engine.start_session().unwrap();
    session.select_destination("europa");
    session.select_band(PassengerBand::Solo);
    session.set_departure_date("2026-08-21");
    session.edit_field(0, PassengerField::FirstName, "Ada");
    session.edit_field(0, PassengerField::LastName, "Lovelace");
    session.edit_field(0, PassengerField::Email, "not-an-email");

    assert!(!session.readiness().enabled());
    assert_eq!(
        session.submit(today(), DateTime::<Utc>::MIN_UTC, 0),
        Err(SubmitError::InvalidFields)
    );

    session.edit_field(0, PassengerField::Email, "ada@moon.base");
    assert!(session.readiness().enabled());
    assert!(session.submit(today(), DateTime::<Utc>::MIN_UTC, 0).is_ok());
}

#[test]
fn guest_booking_parks_then_appends_after_login() {
    let engine = BookingEngine::new(FixtureSource, MemoryStore::default());
    let mut session = engine.start_session().unwrap();
    session.select_destination("europa");
    session.select_band(PassengerBand::Solo);
    session.set_departure_date("2026-08-21");
    session.edit_field(0, PassengerField::FirstName, "Ada");
    session.edit_field(0, PassengerField::LastName, "Lovelace");
    session.edit_field(0, PassengerField::Email, "ada@moon.base");

    let mut record = session
        .submit(today(), DateTime::<Utc>::MIN_UTC, 7)
        .unwrap();
    record.guest = true;
    engine.park_pending(&record).unwrap();
    assert!(engine.bookings().unwrap().is_empty());

    // Login succeeds against the static record, then the parked
    // booking is claimed.
    let mut check = engine.login_check().unwrap();
    check.edit_email("adnane@orbitway.space");
    check.edit_password("ad astra");
    assert!(check.can_login());

    let claimed = engine.claim_pending().unwrap().expect("parked booking");
    assert!(!claimed.guest);
    let log = engine.bookings().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].id, record.id);
}

#[test]
fn engine_bootstrap_is_ready_for_the_form() {
    let engine = BookingEngine::new(FixtureSource, MemoryStore::default());
    let (session, users, bookings) = engine.bootstrap().unwrap();
    assert_eq!(session.catalog().destinations.len(), 2);
    assert_eq!(session.catalog().ports.len(), 2);
    assert_eq!(users.primary().unwrap().email, "adnane@orbitway.space");
    assert!(bookings.is_empty());
}
