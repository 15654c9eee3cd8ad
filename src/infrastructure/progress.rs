//! Progress sinks for screening runs.

use crate::domain::ports::progress_sink::ProgressSink;

/// Writes one line per company to stderr, keeping stdout clean for the
/// JSON report.
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn report(&self, fraction: f64, label: &str) {
        eprintln!("[{:>3.0}%] screening {label}", fraction * 100.0);
    }
}

/// Discards progress. Used when nobody is watching.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&self, _fraction: f64, _label: &str) {}
}
