//! Centralized pricing and rule constants for Orbitway booking logic.
//!
//! These values define the deterministic math for quotes and the
//! booking window. Keeping them together ensures that pricing can only
//! be adjusted via code changes reviewed in version control, rather
//! than through external JSON assets.

// Pricing ------------------------------------------------------------------
/// Every fare is billed as a round trip.
pub(crate) const ROUND_TRIP_LEGS: i64 = 2;
/// Flat surcharge for the radiation-protection insurance option.
pub const INSURANCE_SURCHARGE: i64 = 10_000;
/// Destinations that carry the insurance option.
pub const HAZARDOUS_DESTINATIONS: &[&str] = &["europa", "titan"];
/// Stay length billed when a destination's duration text has no digits.
pub(crate) const DEFAULT_DURATION_DAYS: i64 = 1;
/// Seats billed for the "3-6" band.
pub(crate) const GROUP_BAND_PRICED_COUNT: u32 = 3;

// Booking window -----------------------------------------------------------
pub(crate) const MAX_ADVANCE_DAYS: i64 = 30;

// Field validation ---------------------------------------------------------
pub(crate) const NAME_PATTERN: &str = r"^[A-Za-zÀ-ÖØ-öø-ÿ\s'-]{3,}$";
pub(crate) const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub(crate) const PHONE_PATTERN: &str = r"^\+?[\d\s()\-]{10,15}$";

// Booking references -------------------------------------------------------
pub(crate) const REFERENCE_PREFIX: &str = "OW";

// Auth ---------------------------------------------------------------------
/// Greeting shown when the stored record has no username.
pub(crate) const FALLBACK_USERNAME: &str = "Adnane";
