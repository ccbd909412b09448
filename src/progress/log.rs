use super::ProgressListener;

/// Listener that forwards notifications to `tracing`.
///
/// Stages are logged at debug level; per-row progress is logged at trace level
/// to keep debug output readable on large masks.
#[derive(Debug, Default)]
pub struct LogListener;

impl ProgressListener for LogListener {
    fn stage_changed(&mut self, stage: &str) {
        tracing::debug!("Stage: {}", stage);
    }

    fn progress_changed(&mut self, current: u32, total: u32) {
        tracing::trace!("Row {}/{}", current, total);
    }
}
