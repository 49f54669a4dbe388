//! Persisted booking records and reference-code generation.
//! Reference format: OW-<WORD>-<XXXXXX>, e.g. OW-PHOBOS-3F9A2C.

use chrono::{DateTime, NaiveDate, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::constants::REFERENCE_PREFIX;
use crate::passenger::Passenger;

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

// Word list for booking references
pub const WORD_LIST: [&str; 32] = [
    "ORBIT", "LUNA", "MARS", "EUROPA", "TITAN", "CERES", "VENUS", "PHOBOS", "DEIMOS", "IO",
    "CALLISTO", "GANYMEDE", "TRITON", "PLUTO", "CHARON", "VESTA", "PALLAS", "JUNO", "HYGIEA",
    "MIMAS", "RHEA", "DIONE", "TETHYS", "IAPETUS", "OBERON", "ARIEL", "UMBRIEL", "MIRANDA",
    "NEREID", "APOLLO", "GEMINI", "SOYUZ",
];

/// Build a human-readable booking reference from caller-supplied
/// entropy. Deterministic over the entropy value, so tests can pin it.
#[must_use]
pub fn reference_from_entropy(entropy: u64) -> String {
    let digest = fnv1a64(&entropy.to_le_bytes());
    let word = WORD_LIST[(digest % WORD_LIST.len() as u64) as usize];
    let tail = (digest >> 40) & 0xFF_FFFF;
    format!("{REFERENCE_PREFIX}-{word}-{tail:06X}")
}

/// Draw entropy from the given RNG and build a reference from it.
#[must_use]
pub fn generate_reference(rng: &mut impl RngCore) -> String {
    reference_from_entropy(rng.next_u64())
}

/// One confirmed booking, appended to the device-local log. No update
/// or delete operations exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Generated booking reference.
    pub id: String,
    /// Destination id, resolvable against the catalog.
    pub destination: String,
    /// Accommodation id, resolvable against the catalog.
    pub accommodation: String,
    pub passengers: Vec<Passenger>,
    pub departure_date: NaiveDate,
    pub total_passengers: u32,
    pub insurance_enabled: bool,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
    /// Set when the booking was made before logging in; cleared when
    /// the pending booking is claimed after login.
    #[serde(default)]
    pub guest: bool,
}
