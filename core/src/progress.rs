//! Upload progress.
//!
//! Transports report cumulative bytes; the form turns them into a percentage
//! for the progress indicator.

/// Raw progress notification from a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    /// Bytes sent so far
    pub loaded: u64,
    /// Total bytes, when the transport knows it
    pub total: Option<u64>,
}

/// Progress indicator state owned by the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    /// Always within `0..=100`
    pub percent: u8,
    /// True only while a request is in flight
    pub is_active: bool,
}

impl ProgressState {
    /// State at the start of an upload.
    pub fn started() -> Self {
        Self {
            percent: 0,
            is_active: true,
        }
    }
}

/// Percentage of `loaded` over `total`, rounded and clamped to `0..=100`.
///
/// An unknown or zero total counts as one byte, so any loaded byte reads
/// as complete.
pub fn percent_of(loaded: u64, total: Option<u64>) -> u8 {
    let total = total.filter(|t| *t > 0).unwrap_or(1);
    let percent = (loaded as f64 / total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}
