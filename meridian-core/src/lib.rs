//! # meridian-core
//!
//! Foundation crate for the Meridian country-inference engine.
//! Defines the country registry, lookup keys, signal traits, models,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod country;
pub mod errors;
pub mod key;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MeridianConfig;
pub use country::{Country, CountryRegistry};
pub use errors::{MeridianError, MeridianResult};
pub use key::LookupKey;
pub use models::{EnsembleModel, Posterior, SignalOutput};
pub use traits::ISignal;
