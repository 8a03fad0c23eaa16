use crate::{ScanId, ScanPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send exactly one request to the scoring service.
    SubmitScan { scan_id: ScanId, payload: ScanPayload },
    /// Check whether the scoring service answers at all.
    ProbeBackend,
}
