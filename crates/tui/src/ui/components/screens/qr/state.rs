use chrono::{DateTime, Local};
use trackchain_types::scan::{ScanPayload, VerificationLog, synthesize_payload};

/// Progress added per tick while the scanner runs.
const SCAN_STEP_PERCENT: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning {
        progress: u16,
    },
}

/// State of the QR scanner screen.
#[derive(Debug, Clone, Default)]
pub struct QrState {
    pub phase: ScanPhase,
    pub last_scan: Option<ScanPayload>,
    pub verifications: VerificationLog,
}

impl QrState {
    pub fn is_scanning(&self) -> bool {
        matches!(self.phase, ScanPhase::Scanning { .. })
    }

    /// Starts a scan. Returns `false` when one is already running.
    pub fn launch(&mut self) -> bool {
        if self.is_scanning() {
            return false;
        }
        self.phase = ScanPhase::Scanning { progress: 0 };
        true
    }

    /// Advances a running scan. On completion the payload is stored as the
    /// last scan, recorded as verified, and returned.
    pub fn tick(&mut self, now: DateTime<Local>) -> Option<ScanPayload> {
        let ScanPhase::Scanning { progress } = self.phase else {
            return None;
        };
        let progress = progress + SCAN_STEP_PERCENT;
        if progress < 100 {
            self.phase = ScanPhase::Scanning { progress };
            return None;
        }
        self.phase = ScanPhase::Idle;
        let payload = synthesize_payload(now);
        self.verifications.record(&payload);
        self.last_scan = Some(payload.clone());
        Some(payload)
    }
}
