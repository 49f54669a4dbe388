//! Web-specific booking engine implementation
//!
//! This module provides browser implementations of the
//! orbitway-booking traits and re-exports the core types.

use gloo_storage::{LocalStorage, SessionStorage, Storage};

// Re-export all types from orbitway-booking
pub use orbitway_booking::*;

const BOOKINGS_KEY: &str = "orbitway.bookings";
const PENDING_KEY: &str = "orbitway.pending";
const AUTH_KEY: &str = "orbitway.auth";

/// Web catalog source backed by the static data documents bundled with
/// the app. The live page fetches the same documents over HTTP (see
/// `app::bootstrap`); both paths parse through [`Catalog::from_json`].
pub struct WebCatalogSource;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed with status {0}")]
    Status(u16),
    #[error("Malformed reference data: {0}")]
    Catalog(#[from] CatalogError),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogSource for WebCatalogSource {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let catalog = Catalog::from_json(
            include_str!("../static/assets/data/destinations.json"),
            include_str!("../static/assets/data/accommodations.json"),
            Some(include_str!("../static/assets/data/ports.json")),
        )?;
        Ok(catalog)
    }

    fn load_users(&self) -> Result<UsersList, Self::Error> {
        let users = UsersList::from_json(include_str!("../static/assets/data/user.json"))?;
        Ok(users)
    }
}

/// Web booking store: LocalStorage for the append-only booking log,
/// SessionStorage for the guest booking parked around login.
pub struct WebBookingStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BookingStore for WebBookingStore {
    type Error = WebStorageError;

    fn append_booking(&self, record: &BookingRecord) -> Result<(), Self::Error> {
        let mut log = self.list_bookings()?;
        log.push(record.clone());
        LocalStorage::set(BOOKINGS_KEY, &log)
            .map_err(|e| WebStorageError::Storage(format!("{e:?}")))
    }

    fn list_bookings(&self) -> Result<Vec<BookingRecord>, Self::Error> {
        match LocalStorage::get(BOOKINGS_KEY) {
            Ok(log) => Ok(log),
            Err(_) => Ok(Vec::new()), // No log yet
        }
    }

    fn save_pending(&self, record: &BookingRecord) -> Result<(), Self::Error> {
        SessionStorage::set(PENDING_KEY, record)
            .map_err(|e| WebStorageError::Storage(format!("{e:?}")))
    }

    fn take_pending(&self) -> Result<Option<BookingRecord>, Self::Error> {
        match SessionStorage::get(PENDING_KEY) {
            Ok(record) => {
                SessionStorage::delete(PENDING_KEY);
                Ok(Some(record))
            }
            Err(_) => Ok(None), // Nothing parked
        }
    }
}

/// Load the signed-in snapshot persisted on this device.
#[must_use]
pub fn load_auth() -> AuthState {
    LocalStorage::get(AUTH_KEY).unwrap_or_default()
}

/// Persist the signed-in snapshot.
pub fn store_auth(auth: &AuthState) {
    if let Err(err) = LocalStorage::set(AUTH_KEY, auth) {
        log::error!("failed to persist auth state: {err:?}");
    }
}

/// Drop the signed-in snapshot (logout).
pub fn clear_auth() {
    LocalStorage::delete(AUTH_KEY);
}

/// Create a web-compatible booking engine with `WebCatalogSource` and
/// `WebBookingStore`.
#[must_use]
pub const fn create_web_booking_engine() -> BookingEngine<WebCatalogSource, WebBookingStore> {
    BookingEngine::new(WebCatalogSource, WebBookingStore)
}
