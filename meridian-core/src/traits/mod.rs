pub mod signal;

pub use signal::ISignal;
