//! User-facing notification sink.
//!
//! Controllers are the top-level error boundary: every failed operation is
//! converted into exactly one notification here and is never rethrown to the
//! host UI.

use std::error::Error;

/// Notification sink provided by the host UI.
pub trait Notifier {
    fn success(&self, title: &str, message: &str);
    fn error(&self, title: &str, summary: &str, detail: &str);
}

/// Shared presentation path for any failed operation: one log line, one
/// notification with a fixed summary plus the underlying error detail.
pub fn notify_failure(notifier: &impl Notifier, summary: &str, err: &dyn Error) {
    log::warn!("{summary}: {err}");
    notifier.error("Failure", summary, &err.to_string());
}
