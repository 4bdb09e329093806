pub mod country;
pub mod language;
pub mod whois;

pub use country::{CountryTable, ICountryLookup};
pub use language::{ILanguageLookup, LanguageTable};
pub use whois::{IWhoisLookup, WhoisResolution, WhoisTable};
