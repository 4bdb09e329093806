use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use super::Country;
use crate::constants::PRIOR_SMOOTHING;
use crate::errors::DataError;

/// Legacy two-letter codes still seen in the wild, mapped to their
/// canonical ISO 3166-1 form.
const LEGACY_ALIASES: &[(&str, &str)] = &[("uk", "gb")];

/// Reference rows must expose at least this many tab-separated fields
/// for the columns the engine reads (iso, iso3, name, population, tld,
/// languages).
const MIN_REFERENCE_FIELDS: usize = 16;

/// All known countries plus their smoothed priors, keyed by ISO-2 code.
///
/// Iteration is always in sorted code order, so everything derived from
/// the registry is deterministic.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    countries: BTreeMap<String, Country>,
}

impl CountryRegistry {
    /// Builds a registry from the tab-separated country reference table
    /// and the two-column raw prior table.
    ///
    /// Reference rows use the geonames column layout: field 0 is the
    /// ISO-2 code, 1 the ISO-3 code, 4 the name, 7 the population, 9 the
    /// dotted TLD, and 15 the comma-separated languages. Lines starting
    /// with `#` and blank lines are skipped in both inputs. Duplicate
    /// codes keep the last row seen.
    pub fn from_tsv(reference: &str, priors: &str) -> Result<Self, DataError> {
        let mut countries = parse_reference(reference)?;
        if countries.is_empty() {
            return Err(DataError::EmptyRegistry);
        }

        let raw_weights = parse_priors(priors)?;
        let total: f64 = raw_weights.values().sum();
        if total <= 0.0 {
            return Err(DataError::EmptyPriors);
        }
        for iso in raw_weights.keys() {
            if !countries.contains_key(iso) {
                warn!(%iso, "prior weight for unknown country ignored");
            }
        }

        // Normalize raw weights to sum one, then blend in a uniform 1%
        // so every country keeps a strictly positive prior.
        let k = PRIOR_SMOOTHING / countries.len() as f64;
        for (iso, country) in countries.iter_mut() {
            let normalized = raw_weights.get(iso).copied().unwrap_or(0.0) / total;
            country.prior = (normalized + k) / (1.0 + PRIOR_SMOOTHING);
        }

        Ok(Self { countries })
    }

    /// Reads both tables from disk and delegates to [`Self::from_tsv`].
    pub fn from_files(
        reference_path: impl AsRef<Path>,
        priors_path: impl AsRef<Path>,
    ) -> Result<Self, DataError> {
        let reference = read_table(reference_path.as_ref())?;
        let priors = read_table(priors_path.as_ref())?;
        Self::from_tsv(&reference, &priors)
    }

    pub fn get(&self, iso: &str) -> Option<&Country> {
        self.countries.get(iso)
    }

    /// Country owning a TLD, e.g. `"fr"` or `"uk"`. Empty TLDs never match.
    pub fn by_tld(&self, tld: &str) -> Option<&Country> {
        if tld.is_empty() {
            return None;
        }
        self.countries.values().find(|c| c.tld == tld)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Countries in sorted code order.
    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    /// Known ISO-2 codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Snapshot of every country's smoothed prior.
    pub fn priors(&self) -> BTreeMap<String, f64> {
        self.countries
            .iter()
            .map(|(iso, c)| (iso.clone(), c.prior))
            .collect()
    }

    /// Resolves a free-form country reference to a known canonical ISO-2
    /// code. Accepts ISO-2 (including legacy aliases such as `uk`),
    /// ISO-3, exact lowercase names, and TLDs. Unresolvable input is
    /// `None`, never an error.
    pub fn canonicalize(&self, raw: &str) -> Option<&str> {
        let code = raw.trim().to_lowercase();
        if code.len() < 2 {
            return None;
        }

        let code = LEGACY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == code)
            .map(|(_, canonical)| (*canonical).to_string())
            .unwrap_or(code);

        if let Some((iso, _)) = self.countries.get_key_value(code.as_str()) {
            return Some(iso);
        }
        self.countries
            .values()
            .find(|c| c.iso3 == code || c.name.to_lowercase() == code || (!c.tld.is_empty() && c.tld == code))
            .map(|c| c.iso.as_str())
    }
}

fn read_table(path: &Path) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_reference(reference: &str) -> Result<BTreeMap<String, Country>, DataError> {
    let mut countries = BTreeMap::new();
    for (line_no, line) in reference.lines().enumerate() {
        let line_no = line_no + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_REFERENCE_FIELDS {
            return Err(DataError::MalformedCountryRow {
                line: line_no,
                found: fields.len(),
            });
        }

        let country = parse_row(line_no, &fields)?;
        if let Some(previous) = countries.insert(country.iso.clone(), country) {
            warn!(iso = %previous.iso, line = line_no, "duplicate country row replaces earlier definition");
        }
    }
    Ok(countries)
}

fn parse_row(line_no: usize, fields: &[&str]) -> Result<Country, DataError> {
    let population_raw = fields[7].trim();
    let population = population_raw
        .parse::<u64>()
        .map_err(|_| DataError::InvalidPopulation {
            line: line_no,
            value: population_raw.to_string(),
        })?;

    let tld = fields[9].trim();
    let tld = tld.strip_prefix('.').unwrap_or(tld).to_lowercase();

    let langs = fields[15]
        .split(',')
        .map(clean_lang)
        .filter(|l| !l.is_empty())
        .collect();

    Ok(Country {
        iso: fields[0].trim().to_lowercase(),
        iso3: fields[1].trim().to_lowercase(),
        name: fields[4].trim().to_string(),
        population,
        tld,
        langs,
        prior: 0.0,
    })
}

/// Reduces a language tag to its lowercase primary subtag.
fn clean_lang(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match lowered.split('-').next() {
        Some(primary) => primary.to_string(),
        None => lowered,
    }
}

fn parse_priors(priors: &str) -> Result<BTreeMap<String, f64>, DataError> {
    let mut weights = BTreeMap::new();
    for (line_no, line) in priors.lines().enumerate() {
        let line_no = line_no + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split('\t');
        let iso = match tokens.next() {
            Some(iso) if !iso.trim().is_empty() => iso.trim().to_lowercase(),
            _ => return Err(DataError::MalformedPriorRow { line: line_no }),
        };
        let weight_raw = tokens
            .next()
            .ok_or(DataError::MalformedPriorRow { line: line_no })?
            .trim();
        let weight = weight_raw
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w >= 0.0)
            .ok_or_else(|| DataError::InvalidWeight {
                line: line_no,
                value: weight_raw.to_string(),
            })?;
        weights.insert(iso, weight);
    }
    Ok(weights)
}
