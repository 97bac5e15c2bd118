//! Snowflake ID - 64-bit time-ordered identifier for stored records
//!
//! Layout:
//! - Bits 63-22: milliseconds since [`Snowflake::EPOCH`]
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)
//!
//! Clients never send these back; every lookup goes through a business key.

use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generated record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_704_067_200_000;

    const WORKER_BITS: i64 = 10;
    const SEQUENCE_BITS: i64 = 12;
    const MAX_SEQUENCE: i64 = (1 << Self::SEQUENCE_BITS) - 1;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Milliseconds since the Unix epoch at which this ID was minted
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> (Self::WORKER_BITS + Self::SEQUENCE_BITS)) + Self::EPOCH
    }

    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> Self::SEQUENCE_BITS) & 0x3FF) as u16
    }

    /// Parse from the decimal string form used on the wire
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.trim()
            .parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }

    fn compose(millis: i64, worker_id: u16, sequence: i64) -> Self {
        Self(
            ((millis - Self::EPOCH) << (Self::WORKER_BITS + Self::SEQUENCE_BITS))
                | (i64::from(worker_id) << Self::SEQUENCE_BITS)
                | sequence,
        )
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Strings on the wire: JavaScript clients lose precision above 2^53.
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Snowflake(n)),
            Raw::Text(s) => Snowflake::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}

/// Thread-safe Snowflake generator
///
/// Holds `(last_millis, sequence)` behind a short critical section. When the
/// sequence space for a millisecond is exhausted the caller spins until the
/// clock advances; a clock that steps backwards reuses the last timestamp.
pub struct SnowflakeGenerator {
    worker_id: u16,
    state: Mutex<(i64, i64)>,
}

impl SnowflakeGenerator {
    /// Create a new generator with the given worker ID
    ///
    /// # Panics
    /// Panics if worker_id >= 1024
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id < 1024, "Worker ID must be < 1024");
        Self {
            worker_id,
            state: Mutex::new((0, 0)),
        }
    }

    /// Generate a new unique Snowflake ID
    pub fn generate(&self) -> Snowflake {
        let mut state = self.state.lock();
        let (last, sequence) = *state;
        let mut now = current_millis().max(last);

        let next_sequence = if now == last {
            let seq = (sequence + 1) & Snowflake::MAX_SEQUENCE;
            if seq == 0 {
                while now <= last {
                    std::hint::spin_loop();
                    now = current_millis();
                }
            }
            seq
        } else {
            0
        };

        *state = (now, next_sequence);
        Snowflake::compose(now, self.worker_id, next_sequence)
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(Snowflake::EPOCH)
}
