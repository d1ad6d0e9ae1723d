//! Record identity: a one-letter kind tag followed by a decimal suffix
//! (`D1`, `P3`, `A12`). IDs are assigned by [`KindCounters`] and are never
//! reused, even after a record is removed.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// The three kinds of records the store manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Doctor,
    Patient,
    Appointment,
}

impl RecordKind {
    /// The single-letter tag that prefixes IDs of this kind.
    pub fn tag(&self) -> char {
        match self {
            RecordKind::Doctor => 'D',
            RecordKind::Patient => 'P',
            RecordKind::Appointment => 'A',
        }
    }
}

/// A kind-tagged record ID.
///
/// Displays as the tag plus the numeric suffix (`D1`, `P3`, `A12`) and
/// parses from exactly that notation. Serialized as its display string so
/// the record files carry plain `"D1"` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordId {
    Doctor(u64),
    Patient(u64),
    Appointment(u64),
}

impl RecordId {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordId::Doctor(_) => RecordKind::Doctor,
            RecordId::Patient(_) => RecordKind::Patient,
            RecordId::Appointment(_) => RecordKind::Appointment,
        }
    }

    /// The numeric portion following the kind tag.
    pub fn suffix(&self) -> u64 {
        match self {
            RecordId::Doctor(n) | RecordId::Patient(n) | RecordId::Appointment(n) => *n,
        }
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind().tag(), self.suffix())
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('D') {
            if let Ok(n) = rest.parse() {
                return Ok(RecordId::Doctor(n));
            }
        }
        if let Some(rest) = s.strip_prefix('P') {
            if let Ok(n) = rest.parse() {
                return Ok(RecordId::Patient(n));
            }
        }
        if let Some(rest) = s.strip_prefix('A') {
            if let Ok(n) = rest.parse() {
                return Ok(RecordId::Appointment(n));
            }
        }
        Err(format!("Invalid record id: {}", s))
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// One counter per record kind, owned by the store instance.
///
/// Two paths advance a counter: [`next`](Self::next) for fresh creation
/// (increment, then tag), and [`observe`](Self::observe) when
/// reconstructing persisted records (raise to the loaded suffix, no new ID).
/// After a reload, freshly assigned suffixes are therefore strictly greater
/// than every suffix seen so far; gaps from removed records stay gaps.
#[derive(Debug, Default, Clone)]
pub struct KindCounters {
    doctors: u64,
    patients: u64,
    appointments: u64,
}

impl KindCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next fresh ID of the given kind.
    pub fn next(&mut self, kind: RecordKind) -> RecordId {
        match kind {
            RecordKind::Doctor => {
                self.doctors += 1;
                RecordId::Doctor(self.doctors)
            }
            RecordKind::Patient => {
                self.patients += 1;
                RecordId::Patient(self.patients)
            }
            RecordKind::Appointment => {
                self.appointments += 1;
                RecordId::Appointment(self.appointments)
            }
        }
    }

    /// Fold a persisted ID into the counters so later fresh IDs cannot
    /// collide with it.
    pub fn observe(&mut self, id: RecordId) {
        let slot = match id.kind() {
            RecordKind::Doctor => &mut self.doctors,
            RecordKind::Patient => &mut self.patients,
            RecordKind::Appointment => &mut self.appointments,
        };
        if id.suffix() > *slot {
            *slot = id.suffix();
        }
    }
}
