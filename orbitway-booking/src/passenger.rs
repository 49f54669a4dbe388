//! Passenger records and roster reconciliation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::quote::PassengerBand;
use crate::validation::PassengerField;

/// One traveller's contact details; one record per billed seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Optional at the data-model level.
    #[serde(default)]
    pub phone: String,
}

impl Passenger {
    #[must_use]
    pub fn field(&self, field: PassengerField) -> &str {
        match field {
            PassengerField::FirstName => &self.first_name,
            PassengerField::LastName => &self.last_name,
            PassengerField::Email => &self.email,
            PassengerField::Phone => &self.phone,
        }
    }

    pub fn set_field(&mut self, field: PassengerField, value: &str) {
        let slot = match field {
            PassengerField::FirstName => &mut self.first_name,
            PassengerField::LastName => &mut self.last_name,
            PassengerField::Email => &mut self.email,
            PassengerField::Phone => &mut self.phone,
        };
        *slot = value.to_string();
    }
}

/// Seat-backed roster. Length always reconciles to the selected band's
/// priced count: new seats start blank, surplus seats drop from the
/// end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PassengerRoster(SmallVec<[Passenger; 3]>);

impl PassengerRoster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster for a fresh form: a single blank seat, matching the one
    /// card the source rendered before any band was picked.
    #[must_use]
    pub fn solo() -> Self {
        let mut roster = Self::new();
        roster.0.push(Passenger::default());
        roster
    }

    /// Grow or shrink to the band's resolved count.
    pub fn reconcile(&mut self, band: PassengerBand) {
        let target = band.priced_count() as usize;
        while self.0.len() < target {
            self.0.push(Passenger::default());
        }
        self.0.truncate(target);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, seat: usize) -> Option<&Passenger> {
        self.0.get(seat)
    }

    pub fn get_mut(&mut self, seat: usize) -> Option<&mut Passenger> {
        self.0.get_mut(seat)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Passenger> {
        self.0.iter()
    }

    /// Owned copy for a booking record.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Passenger> {
        self.0.to_vec()
    }
}

impl<'a> IntoIterator for &'a PassengerRoster {
    type Item = &'a Passenger;
    type IntoIter = std::slice::Iter<'a, Passenger>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
