/// Receives screening progress, one report per company in sequence.
///
/// Fire-and-forget: implementations must not block or fail the pass.
pub trait ProgressSink: Send + Sync {
    /// `fraction` is in `[0, 1]`; `label` names the company being processed.
    fn report(&self, fraction: f64, label: &str);
}
