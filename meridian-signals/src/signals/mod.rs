pub mod geoip;
pub mod knowledge_base;
pub mod language;
pub mod milgov;
pub mod prior;
pub mod tld;
pub mod whois;

pub use geoip::GeoIpSignal;
pub use knowledge_base::KnowledgeBaseSignal;
pub use language::LanguageSignal;
pub use milgov::MilGovSignal;
pub use prior::PriorSignal;
pub use tld::TldSignal;
pub use whois::{FreetextWhoisSignal, ParsedWhoisSignal};

use std::sync::Arc;

use tracing::debug;

use meridian_core::config::MeridianConfig;
use meridian_core::{CountryRegistry, ISignal, MeridianResult};

use crate::language_model::LanguageCountryModel;
use crate::providers::{ICountryLookup, ILanguageLookup, IWhoisLookup};

/// External lookup tables the standard stack draws on.
#[derive(Clone)]
pub struct SignalProviders {
    pub language: Arc<dyn ILanguageLookup>,
    pub knowledge_base: Arc<dyn ICountryLookup>,
    pub whois: Arc<dyn IWhoisLookup>,
}

/// Builds the standard seven-signal stack in its canonical order.
///
/// The order must not change casually: fitted coefficient vectors are
/// positional, and reordering or extending the stack invalidates them.
pub fn standard_signals(
    registry: Arc<CountryRegistry>,
    providers: SignalProviders,
    config: &MeridianConfig,
) -> MeridianResult<Vec<Box<dyn ISignal>>> {
    let confidences = &config.confidences;
    let model = Arc::new(LanguageCountryModel::from_registry(
        &registry,
        &config.language_model,
    ));

    let signals: Vec<Box<dyn ISignal>> = vec![
        Box::new(PriorSignal::new(&registry, confidences.prior)?),
        Box::new(ParsedWhoisSignal::new(
            Arc::clone(&providers.whois),
            confidences.whois_parsed,
        )),
        Box::new(FreetextWhoisSignal::new(
            Arc::clone(&providers.whois),
            confidences.whois_freetext,
        )),
        Box::new(MilGovSignal::new(confidences.milgov)),
        Box::new(KnowledgeBaseSignal::new(
            Arc::clone(&providers.knowledge_base),
            confidences.knowledge_base,
        )),
        Box::new(LanguageSignal::new(
            Arc::clone(&providers.language),
            model,
            confidences.language,
        )),
        Box::new(TldSignal::new(Arc::clone(&registry), confidences.tld)),
    ];

    debug!(count = signals.len(), "built standard signal stack");
    Ok(signals)
}
