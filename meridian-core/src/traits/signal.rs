use crate::key::LookupKey;
use crate::models::SignalOutput;

/// One independent source of country evidence.
///
/// Signals are infallible: anything a signal cannot answer, including
/// internal lookup failures, comes back as [`SignalOutput::none`] so the
/// ensemble can fall through to the remaining signals.
pub trait ISignal: Send + Sync {
    /// Stable name used to pair the signal with its fitted coefficient.
    fn name(&self) -> &str;

    /// What this signal knows about the key.
    fn infer(&self, key: &LookupKey) -> SignalOutput;
}
