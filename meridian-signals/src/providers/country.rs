use std::collections::HashMap;

/// Access to a registered-domain to country mapping, as produced by
/// knowledge-base exports or server geolocation runs.
pub trait ICountryLookup: Send + Sync {
    /// Country code for a registered domain, `None` when the domain was
    /// never resolved.
    fn lookup(&self, registered_domain: &str) -> Option<&str>;
}

/// In-memory registered-domain table.
#[derive(Debug, Default, Clone)]
pub struct CountryTable {
    entries: HashMap<String, String>,
}

impl CountryTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, domain: impl Into<String>, iso: impl Into<String>) {
        self.entries.insert(domain.into(), iso.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ICountryLookup for CountryTable {
    fn lookup(&self, registered_domain: &str) -> Option<&str> {
        self.entries.get(registered_domain).map(String::as_str)
    }
}
