//! Submit-readiness aggregation.
//!
//! Purely derived from what the session currently reports; holds no
//! state of its own and is recomputed after every relevant change.

use serde::{Deserialize, Serialize};

use crate::session::BookingSession;

/// The individual requirements behind the submit control, each
/// queryable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReadiness {
    /// No field currently displays an invalid state.
    pub fields_clean: bool,
    pub destination_selected: bool,
    /// A departure date has been entered. Whether it passes the date
    /// rule is a separate concern checked at submit time.
    pub departure_entered: bool,
    pub band_selected: bool,
    /// Either no accommodation applies to the destination, or one is
    /// selected.
    pub accommodation_satisfied: bool,
}

impl SubmitReadiness {
    /// The submit control is enabled only when every requirement holds.
    #[must_use]
    pub const fn enabled(self) -> bool {
        self.fields_clean
            && self.destination_selected
            && self.departure_entered
            && self.band_selected
            && self.accommodation_satisfied
    }
}

/// Aggregate the session's current state into the submit verdict.
#[must_use]
pub fn submit_readiness(session: &BookingSession) -> SubmitReadiness {
    let selection = session.selection();
    SubmitReadiness {
        fields_clean: !session.any_field_invalid(),
        destination_selected: selection.destination_id.is_some(),
        departure_entered: session.departure_entered(),
        band_selected: selection.band.is_some(),
        accommodation_satisfied: !session.accommodation_applicable()
            || selection.accommodation_id.is_some(),
    }
}
