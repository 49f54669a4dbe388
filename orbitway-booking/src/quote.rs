//! Quote derivation: the pure pricing function over the current
//! selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::constants::{GROUP_BAND_PRICED_COUNT, INSURANCE_SURCHARGE, ROUND_TRIP_LEGS};

/// Passenger-count selection bands offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassengerBand {
    #[serde(rename = "1")]
    Solo,
    #[serde(rename = "2")]
    Pair,
    /// Three to six travellers. Priced at the lower bound; the true
    /// group size is never collected.
    #[serde(rename = "3-6")]
    Group,
}

impl PassengerBand {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "1",
            Self::Pair => "2",
            Self::Group => "3-6",
        }
    }

    /// Seats billed (and passenger records kept) for this band.
    #[must_use]
    pub const fn priced_count(self) -> u32 {
        match self {
            Self::Solo => 1,
            Self::Pair => 2,
            Self::Group => GROUP_BAND_PRICED_COUNT,
        }
    }

    pub const ALL: [Self; 3] = [Self::Solo, Self::Pair, Self::Group];
}

impl fmt::Display for PassengerBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PassengerBand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Solo),
            "2" => Ok(Self::Pair),
            "3-6" => Ok(Self::Group),
            _ => Err(()),
        }
    }
}

impl From<PassengerBand> for String {
    fn from(value: PassengerBand) -> Self {
        value.as_str().to_string()
    }
}

fn default_insurance() -> bool {
    true
}

/// The form selections that feed the quote engine. Mutated only by
/// event handlers; the engine reads it, never the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub destination_id: Option<String>,
    #[serde(default)]
    pub accommodation_id: Option<String>,
    #[serde(default)]
    pub band: Option<PassengerBand>,
    /// On by default; only meaningful for hazardous destinations.
    #[serde(default = "default_insurance")]
    pub insurance_enabled: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            destination_id: None,
            accommodation_id: None,
            band: None,
            insurance_enabled: true,
        }
    }
}

/// A derived price breakdown. Recomputed from scratch on every input
/// change; never stored or mutated incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Round-trip fare per person.
    pub travel_price: i64,
    /// Accommodation cost per person for the billed stay.
    pub stay_price: i64,
    pub per_person_price: i64,
    pub passenger_count: u32,
    pub insurance_surcharge: i64,
    pub total_price: i64,
}

/// Outcome of pricing a possibly-partial selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteOutcome {
    Priced(Quote),
    /// Destination, accommodation, or band still missing. A legitimate
    /// intermediate state, not an error; no price is shown.
    Incomplete,
}

impl QuoteOutcome {
    #[must_use]
    pub const fn quote(self) -> Option<Quote> {
        match self {
            Self::Priced(quote) => Some(quote),
            Self::Incomplete => None,
        }
    }

    #[must_use]
    pub const fn is_incomplete(self) -> bool {
        matches!(self, Self::Incomplete)
    }
}

/// Price the current selection, or report it incomplete.
///
/// The presence check is a strict AND: destination, an accommodation
/// actually available on that destination, and a passenger band must
/// all be selected before any price exists. Pure and idempotent; safe
/// to call on every keystroke.
#[must_use]
pub fn compute_quote(selection: &Selection, catalog: &Catalog) -> QuoteOutcome {
    let Some(destination_id) = selection.destination_id.as_deref() else {
        return QuoteOutcome::Incomplete;
    };
    let Some(accommodation_id) = selection.accommodation_id.as_deref() else {
        return QuoteOutcome::Incomplete;
    };
    let Some(band) = selection.band else {
        return QuoteOutcome::Incomplete;
    };
    let Some(destination) = catalog.destination(destination_id) else {
        return QuoteOutcome::Incomplete;
    };
    let Some(accommodation) = catalog.accommodation(accommodation_id) else {
        return QuoteOutcome::Incomplete;
    };
    if !accommodation.is_available_on(destination_id) {
        return QuoteOutcome::Incomplete;
    }

    let passenger_count = band.priced_count();
    let travel_price = destination.price * ROUND_TRIP_LEGS;
    let stay_price = accommodation.price_per_day * destination.duration_days();
    let per_person_price = travel_price + stay_price;
    let insurance_surcharge = if destination.hazardous() && selection.insurance_enabled {
        INSURANCE_SURCHARGE
    } else {
        0
    };
    let total_price = per_person_price * i64::from(passenger_count) + insurance_surcharge;

    QuoteOutcome::Priced(Quote {
        travel_price,
        stay_price,
        per_person_price,
        passenger_count,
        insurance_surcharge,
        total_price,
    })
}
