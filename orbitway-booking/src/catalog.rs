//! Catalog reference data: destinations, accommodations, departure ports.
//!
//! Loaded once per page session from static JSON documents and treated
//! as read-only afterwards.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_DURATION_DAYS, HAZARDOUS_DESTINATIONS};

static DURATION_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("duration pattern is valid"));

/// A bookable destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    /// Base one-way fare in whole currency units.
    pub price: i64,
    /// Free text with an embedded day count, e.g. "10 days".
    pub travel_duration: String,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl Destination {
    /// Days billed for the stay: the FIRST integer substring of
    /// `travel_duration`. "6 months (180 days)" therefore bills 6 days,
    /// and duration text without digits bills one day.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        DURATION_DIGITS
            .find(&self.travel_duration)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_DURATION_DAYS)
    }

    /// Whether bookings here carry the insurance option.
    #[must_use]
    pub fn hazardous(&self) -> bool {
        HAZARDOUS_DESTINATIONS.contains(&self.id.as_str())
    }
}

/// An accommodation offer, pairable with a subset of destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: String,
    pub name: String,
    /// Nightly rate in whole currency units.
    pub price_per_day: i64,
    /// Destination ids this accommodation may be paired with.
    #[serde(default)]
    pub available_on: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
}

impl Accommodation {
    #[must_use]
    pub fn is_available_on(&self, destination_id: &str) -> bool {
        self.available_on.iter().any(|id| id == destination_id)
    }

    /// Card copy: the short description when present, else the long one.
    #[must_use]
    pub fn blurb(&self) -> &str {
        self.short_description
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or_default()
    }
}

/// A launch site the trip departs from. Reference data only; ports do
/// not affect pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeparturePort {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct DestinationsDoc {
    #[serde(default)]
    destinations: Vec<Destination>,
}

#[derive(Deserialize)]
struct AccommodationsDoc {
    #[serde(default)]
    accommodations: Vec<Accommodation>,
}

#[derive(Deserialize)]
struct PortsDoc {
    #[serde(default)]
    ports: Vec<DeparturePort>,
}

/// Why the reference data could not be assembled. Any variant is fatal
/// to form initialization.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed destinations document: {0}")]
    Destinations(#[source] serde_json::Error),
    #[error("malformed accommodations document: {0}")]
    Accommodations(#[source] serde_json::Error),
    #[error("malformed departure ports document: {0}")]
    Ports(#[source] serde_json::Error),
}

/// Immutable reference data for one page session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub destinations: Vec<Destination>,
    pub accommodations: Vec<Accommodation>,
    #[serde(default)]
    pub ports: Vec<DeparturePort>,
}

impl Catalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble the catalog from its source documents. The ports
    /// document is optional; older data sets ship without one.
    ///
    /// # Errors
    ///
    /// Returns an error if any document cannot be parsed.
    pub fn from_json(
        destinations_json: &str,
        accommodations_json: &str,
        ports_json: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let destinations: DestinationsDoc =
            serde_json::from_str(destinations_json).map_err(CatalogError::Destinations)?;
        let accommodations: AccommodationsDoc =
            serde_json::from_str(accommodations_json).map_err(CatalogError::Accommodations)?;
        let ports = match ports_json {
            Some(json) => {
                let doc: PortsDoc = serde_json::from_str(json).map_err(CatalogError::Ports)?;
                doc.ports
            }
            None => Vec::new(),
        };
        Ok(Self {
            destinations: destinations.destinations,
            accommodations: accommodations.accommodations,
            ports,
        })
    }

    #[must_use]
    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn accommodation(&self, id: &str) -> Option<&Accommodation> {
        self.accommodations.iter().find(|a| a.id == id)
    }

    /// Accommodations pairable with the given destination, in document
    /// order.
    #[must_use]
    pub fn accommodations_for(&self, destination_id: &str) -> Vec<&Accommodation> {
        self.accommodations
            .iter()
            .filter(|a| a.is_available_on(destination_id))
            .collect()
    }

    #[must_use]
    pub fn port(&self, id: &str) -> Option<&DeparturePort> {
        self.ports.iter().find(|p| p.id == id)
    }

    /// Whether there is anything to book at all.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.destinations.is_empty()
    }
}
