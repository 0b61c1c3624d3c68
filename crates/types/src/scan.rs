//! QR verification model.
//!
//! Scanning is simulated: [`synthesize_payload`] produces the payload a
//! scanner would have decoded, and [`VerificationLog`] keeps the most recent
//! outcomes for display.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Number of verifications kept in the recent list.
pub const RECENT_VERIFICATION_LIMIT: usize = 5;

const SCANNED_PRODUCT: &str = "mRNA-1273 Booster";
const SCANNED_BATCH: &str = "PF-2024-001";
const SCANNED_LOCATION: &str = "Dock scanner · Berlin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerificationStatus {
    Verified,
    Rejected,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationStatus::Verified => f.write_str("Verified"),
            VerificationStatus::Rejected => f.write_str("Rejected"),
        }
    }
}

/// Data decoded from a package label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanPayload {
    pub code: String,
    pub product: String,
    pub batch: String,
    pub location: String,
    pub timestamp: String,
}

/// Outcome of one verification, newest first in [`VerificationLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub id: String,
    pub product: String,
    pub status: VerificationStatus,
    pub timestamp: String,
}

/// Builds the payload for a scan completed at `now`.
///
/// The code is `TC-` followed by the last six digits of the epoch
/// milliseconds.
pub fn synthesize_payload(now: DateTime<Local>) -> ScanPayload {
    let millis = now.timestamp_millis().unsigned_abs();
    ScanPayload {
        code: format!("TC-{:06}", millis % 1_000_000),
        product: SCANNED_PRODUCT.to_string(),
        batch: SCANNED_BATCH.to_string(),
        location: SCANNED_LOCATION.to_string(),
        timestamp: now.format("%d/%m/%Y, %H:%M:%S").to_string(),
    }
}

/// Bounded, newest-first list of recent verifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationLog {
    entries: VecDeque<Verification>,
}

impl VerificationLog {
    pub fn empty() -> Self {
        Self {
            entries: VecDeque::with_capacity(RECENT_VERIFICATION_LIMIT),
        }
    }

    /// Log pre-populated with the sample history shown on first launch.
    pub fn seeded() -> Self {
        let seed = [
            ("VR-3021", "Pfizer", VerificationStatus::Verified, "27/11/2025, 11:02:14"),
            ("VR-3018", "Chinoform", VerificationStatus::Verified, "27/11/2025, 09:47:51"),
            ("VR-3012", "Malaria Vaccine", VerificationStatus::Rejected, "26/11/2025, 17:20:03"),
        ];
        Self {
            entries: seed
                .into_iter()
                .map(|(id, product, status, timestamp)| Verification {
                    id: id.to_string(),
                    product: product.to_string(),
                    status,
                    timestamp: timestamp.to_string(),
                })
                .collect(),
        }
    }

    /// Records a verified scan at the front of the list, evicting the
    /// oldest entry past [`RECENT_VERIFICATION_LIMIT`].
    pub fn record(&mut self, payload: &ScanPayload) -> &Verification {
        self.push(Verification {
            id: payload.code.clone(),
            product: payload.product.clone(),
            status: VerificationStatus::Verified,
            timestamp: payload.timestamp.clone(),
        })
    }

    pub fn push(&mut self, verification: Verification) -> &Verification {
        self.entries.push_front(verification);
        self.entries.truncate(RECENT_VERIFICATION_LIMIT);
        &self.entries[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Verification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for VerificationLog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(millis).single().expect("valid timestamp")
    }

    #[test]
    fn payload_code_uses_last_six_millisecond_digits() {
        let payload = synthesize_payload(at(1_764_230_400_123));
        assert_eq!(payload.code, "TC-400123");
        assert_eq!(payload.product, "mRNA-1273 Booster");
        assert_eq!(payload.batch, "PF-2024-001");
    }

    #[test]
    fn payload_code_is_zero_padded() {
        let payload = synthesize_payload(at(1_764_230_000_042));
        assert_eq!(payload.code, "TC-000042");
    }

    #[test]
    fn seeded_log_lists_sample_history_newest_first() {
        let log = VerificationLog::seeded();
        let ids: Vec<&str> = log.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["VR-3021", "VR-3018", "VR-3012"]);
        assert_eq!(log.iter().last().map(|entry| entry.status), Some(VerificationStatus::Rejected));
    }

    #[test]
    fn recording_prepends_and_caps_the_list() {
        let mut log = VerificationLog::seeded();
        for offset in 0..4 {
            let payload = synthesize_payload(at(1_764_230_400_000 + offset));
            log.record(&payload);
        }
        assert_eq!(log.len(), RECENT_VERIFICATION_LIMIT);
        let ids: Vec<&str> = log.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["TC-400003", "TC-400002", "TC-400001", "TC-400000", "VR-3021"]);
    }
}
