pub mod registry;

pub use registry::CountryRegistry;

use serde::{Deserialize, Serialize};

/// One row of the country reference table, immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, lowercase. Primary key.
    pub iso: String,
    /// ISO 3166-1 alpha-3 code, lowercase.
    pub iso3: String,
    /// English short name.
    pub name: String,
    pub population: u64,
    /// Country-code TLD without the leading dot. May be empty.
    pub tld: String,
    /// Languages in prevalence order, reduced to lowercase primary
    /// subtags: `"en-GB"` becomes `"en"`. Duplicates are preserved.
    pub langs: Vec<String>,
    /// Smoothed probability that this country produced an arbitrary
    /// lookup key. Strictly positive, priors sum to one per registry.
    pub prior: f64,
}
