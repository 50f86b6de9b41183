//! Progress notification port
//!
//! Lets a consumer observe the fan-out of a request: each concurrent fetch
//! announces its start and how it settled. Implementations live in the
//! binary (console reporter); the default is a no-op.

/// Callback for fan-out progress during orchestration
pub trait ProgressNotifier: Send + Sync {
    /// Called when a fetch task is launched
    fn on_fetch_start(&self, label: &str);

    /// Called when a fetch task settles, successfully or not
    fn on_fetch_settled(&self, label: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_fetch_start(&self, _label: &str) {}
    fn on_fetch_settled(&self, _label: &str, _success: bool) {}
}
