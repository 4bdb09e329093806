pub mod ensemble_model;
pub mod posterior;
pub mod signal_output;

pub use ensemble_model::EnsembleModel;
pub use posterior::Posterior;
pub use signal_output::SignalOutput;
