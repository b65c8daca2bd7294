//! Request identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Unique request identifier, echoed in the `x-request-id` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new request ID from the clock and a process-wide sequence.
    pub fn generate() -> Self {
        let nanos = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default()
            .unsigned_abs();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:08x}", nanos, mix(seq)))
    }

    /// Create from an existing ID string, e.g. an inbound header.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Spread sequential counters so adjacent ids do not share a suffix.
fn mix(seq: u32) -> u32 {
    seq.wrapping_mul(0x9E37_79B9).rotate_left(13) ^ 0x5bd1_e995
}
