mod log;

pub use log::LogListener;

/// Observer for transform progress.
///
/// Notifications are fire-and-forget: they carry no return value and must not
/// abort the computation. Both methods default to no-ops so implementors can
/// subscribe to only the events they care about.
pub trait ProgressListener {
    /// A new stage started ("Initialization", "Forward Scan", "Backward Scan",
    /// "Normalization", "Complete").
    fn stage_changed(&mut self, _stage: &str) {}

    /// Row `current` of `total` was processed in the current scan.
    fn progress_changed(&mut self, _current: u32, _total: u32) {}
}

/// Listener that ignores every notification.
#[derive(Debug, Default)]
pub struct NoopListener;

impl ProgressListener for NoopListener {}
