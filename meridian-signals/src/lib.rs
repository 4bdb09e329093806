//! # meridian-signals
//!
//! The concrete evidence sources behind country inference: in-memory
//! lookup providers, the language→country model, and one signal adapter
//! per evidence type. Signals are assembled into the canonical stack by
//! [`signals::standard_signals`].

pub mod language_model;
pub mod providers;
pub mod signals;

pub use language_model::LanguageCountryModel;
pub use providers::{
    CountryTable, ICountryLookup, ILanguageLookup, IWhoisLookup, LanguageTable, WhoisResolution,
    WhoisTable,
};
pub use signals::{standard_signals, SignalProviders};
