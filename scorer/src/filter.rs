use shared::models::{DeviceStatus, Pod};

/// Admission checks supplied by the host scheduler.
///
/// `None` means the check failed; `Some` carries the requested card count
/// or the per-card threshold implied by the request. All three checks must
/// pass before any card is scored. A failing check zeroes the basic term
/// but never fails the scoring call itself; rejecting an infeasible node
/// outright is the host's responsibility upstream.
pub trait FitFilter {
    /// Whether the node can host the requested card count.
    fn fits_count(&self, pod: &Pod, status: &DeviceStatus) -> Option<u64>;

    /// Per-card free-memory threshold implied by the request.
    fn fits_memory(&self, count: u64, pod: &Pod, status: &DeviceStatus) -> Option<u64>;

    /// Per-card clock threshold implied by the request.
    fn fits_clock(&self, count: u64, pod: &Pod, status: &DeviceStatus) -> Option<u64>;
}
