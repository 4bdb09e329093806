//! Shared fixtures for country-inference tests: a twelve-country
//! reference table with prior weights, a labelled URL set, and
//! pre-filled provider tables covering every signal.
//!
//! Everything is embedded as constants so tests run without touching
//! the filesystem. Builders panic on malformed fixture data.

use std::sync::Arc;

use meridian_core::{CountryRegistry, ISignal, MeridianConfig};
use meridian_signals::{
    standard_signals, CountryTable, LanguageTable, SignalProviders, WhoisResolution, WhoisTable,
};

// ── embedded datasets ───────────────────────────────────────────────

/// Twelve-country slice of the geonames country reference, header
/// comment included. ISO codes are uppercase on purpose: parsers must
/// normalize them.
pub const COUNTRY_REFERENCE_TSV: &str = concat!(
    "# ISO\tISO3\tISO-Numeric\tfips\tCountry\tCapital\tArea(in sq km)\tPopulation\tContinent\ttld\tCurrencyCode\tCurrencyName\tPhone\tPostal Code Format\tPostal Code Regex\tLanguages\tgeonameid\tneighbours\tEquivalentFipsCode\n",
    "US\tUSA\t840\tUS\tUnited States\tWashington\t9629091\t310232863\tNA\t.us\tUSD\tDollar\t1\t#####-####\t^\\d{5}(-\\d{4})?$\ten-US,es-US,haw,fr\t6252001\tCA,MX,CU\t\n",
    "GB\tGBR\t826\tUK\tUnited Kingdom\tLondon\t244820\t62348447\tEU\t.uk\tGBP\tPound\t44\t@# #@@\t^[A-Z]\\d[A-Z0-9]? \\d[A-Z]{2}$\ten-GB,cy-GB,gd\t2635167\tIE\t\n",
    "MX\tMEX\t484\tMX\tMexico\tMexico City\t1972550\t112468855\tNA\t.mx\tMXN\tPeso\t52\t#####\t^\\d{5}$\tes-MX\t3996063\tGT,US,BZ\t\n",
    "DE\tDEU\t276\tGM\tGermany\tBerlin\t357021\t81802257\tEU\t.de\tEUR\tEuro\t49\t#####\t^\\d{5}$\tde\t2921044\tCH,PL,NL,DK,BE,CZ,LU,FR,AT\t\n",
    "\n",
    "FR\tFRA\t250\tFR\tFrance\tParis\t547030\t64768389\tEU\t.fr\tEUR\tEuro\t33\t#####\t^\\d{5}$\tfr-FR,frp,br,co,ca,eu,oc\t3017382\tCH,DE,BE,LU,IT,AD,MC,ES\t\n",
    "ES\tESP\t724\tSP\tSpain\tMadrid\t504782\t46505963\tEU\t.es\tEUR\tEuro\t34\t#####\t^\\d{5}$\tes-ES,ca,gl,eu,oc\t2510769\tAD,PT,GI,FR,MA\t\n",
    "CA\tCAN\t124\tCA\tCanada\tOttawa\t9984670\t33679000\tNA\t.ca\tCAD\tDollar\t1\t@#@ #@#\t^[A-Z]\\d[A-Z] \\d[A-Z]\\d$\ten-CA,fr-CA,iu\t6251999\tUS\t\n",
    "BR\tBRA\t076\tBR\tBrazil\tBrasilia\t8511965\t201103330\tSA\t.br\tBRL\tReal\t55\t#####-###\t^\\d{5}-\\d{3}$\tpt-BR,es,en,fr\t3469034\tSR,PE,BO,UY,GY,PY,GF,VE,CO,AR\t\n",
    "JP\tJPN\t392\tJA\tJapan\tTokyo\t377835\t127288000\tAS\t.jp\tJPY\tYen\t81\t###-####\t^\\d{3}-\\d{4}$\tja\t1861060\t\t\n",
    "AU\tAUS\t036\tAS\tAustralia\tCanberra\t7686850\t21515754\tOC\t.au\tAUD\tDollar\t61\t####\t^\\d{4}$\ten-AU\t2077456\t\t\n",
    "CH\tCHE\t756\tSZ\tSwitzerland\tBern\t41290\t7581000\tEU\t.ch\tCHF\tFranc\t41\t####\t^\\d{4}$\tde-CH,fr-CH,it-CH,rm\t2658434\tDE,IT,LI,FR,AT\t\n",
    "AT\tAUT\t040\tAU\tAustria\tVienna\t83858\t8205000\tEU\t.at\tEUR\tEuro\t43\t####\t^\\d{4}$\tde-AT,hr,hu,sl\t2782113\tCH,DE,HU,SK,CZ,IT,SI,LI\t\n",
);

/// Raw prior weights. They sum to 0.69, so loading must renormalize.
pub const PRIOR_WEIGHTS_TSV: &str = concat!(
    "us\t0.30\n",
    "gb\t0.05\n",
    "mx\t0.05\n",
    "de\t0.06\n",
    "fr\t0.05\n",
    "es\t0.03\n",
    "ca\t0.04\n",
    "br\t0.03\n",
    "jp\t0.04\n",
    "au\t0.02\n",
    "ch\t0.01\n",
    "at\t0.01\n",
);

/// Labelled URLs covering every fixture country plus a .mil host and
/// one full URL with scheme and path.
pub const GOLD_TSV: &str = concat!(
    "whitehouse.gov\tus\n",
    "news.bbc.co.uk\tgb\n",
    "www.unam.mx\tmx\n",
    "www.spiegel.de\tde\n",
    "www.lemonde.fr\tfr\n",
    "www.elpais.es\tes\n",
    "www.cbc.ca\tca\n",
    "www.globo.com.br\tbr\n",
    "www.asahi.jp\tjp\n",
    "www.abc.net.au\tau\n",
    "www.admin.ch\tch\n",
    "www.orf.at\tat\n",
    "https://www.ibm.com/products\tus\n",
    "www.navy.mil\tus\n",
);

// ── builders ────────────────────────────────────────────────────────

/// Registry over the embedded reference and prior data.
///
/// # Panics
/// Panics if the embedded fixtures fail to parse.
pub fn registry() -> CountryRegistry {
    CountryRegistry::from_tsv(COUNTRY_REFERENCE_TSV, PRIOR_WEIGHTS_TSV)
        .unwrap_or_else(|e| panic!("embedded reference data failed to parse: {e}"))
}

pub fn shared_registry() -> Arc<CountryRegistry> {
    Arc::new(registry())
}

/// Labelled `(url, iso)` pairs from [`GOLD_TSV`].
pub fn gold_rows() -> Vec<(String, String)> {
    GOLD_TSV
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (url, iso) = line
                .split_once('\t')
                .unwrap_or_else(|| panic!("malformed labelled row: {line:?}"));
            (url.to_string(), iso.to_string())
        })
        .collect()
}

/// Page-language detections for the labelled URLs, keyed verbatim.
///
/// `www.navy.mil` resolved to no usable language and the ibm.com URL
/// was never resolved, so tests can exercise both silent paths.
pub fn language_table() -> LanguageTable {
    let mut table = LanguageTable::default();
    table.insert("whitehouse.gov", "en");
    table.insert("news.bbc.co.uk", "en");
    table.insert("www.unam.mx", "es");
    table.insert("www.spiegel.de", "de");
    table.insert("www.lemonde.fr", "fr");
    table.insert("www.elpais.es", "es");
    table.insert("www.cbc.ca", "en");
    table.insert("www.globo.com.br", "pt");
    table.insert("www.asahi.jp", "ja");
    table.insert("www.abc.net.au", "en");
    table.insert("www.admin.ch", "de");
    table.insert("www.orf.at", "de");
    table.insert_unknown("www.navy.mil");
    table
}

/// Knowledge-base assignments keyed by registered domain.
pub fn knowledge_base_table() -> CountryTable {
    let mut table = CountryTable::default();
    table.insert("unam.mx", "mx");
    table.insert("bbc.co.uk", "gb");
    table.insert("orf.at", "at");
    table.insert("spiegel.de", "de");
    table.insert("admin.ch", "ch");
    table.insert("globo.com.br", "br");
    table.insert("ibm.com", "us");
    table.insert("ac.gov.br", "br");
    table
}

/// WHOIS resolutions keyed by registered domain, covering all four
/// resolution shapes.
pub fn whois_table() -> WhoisTable {
    let mut table = WhoisTable::default();
    table.insert("unesco.org", WhoisResolution::Parsed("fr".to_string()));
    table.insert("ibm.com", WhoisResolution::Parsed("us".to_string()));
    table.insert("admin.ch", WhoisResolution::Parsed("ch".to_string()));
    table.insert("lemonde.fr", WhoisResolution::Parsed("fr".to_string()));
    table.insert(
        "google.ca",
        WhoisResolution::Freetext(vec![("us".to_string(), 2), ("ca".to_string(), 2)]),
    );
    table.insert(
        "macalester.edu",
        WhoisResolution::Freetext(vec![("us".to_string(), 3)]),
    );
    table.insert(
        "abc.net.au",
        WhoisResolution::Freetext(vec![("au".to_string(), 2), ("us".to_string(), 1)]),
    );
    table.insert("dead.example", WhoisResolution::Empty);
    table
}

/// Provider bundle wired to the in-memory tables above.
pub fn providers() -> SignalProviders {
    SignalProviders {
        language: Arc::new(language_table()),
        knowledge_base: Arc::new(knowledge_base_table()),
        whois: Arc::new(whois_table()),
    }
}

pub fn config() -> MeridianConfig {
    MeridianConfig::default()
}

/// The full seven-signal stack over the fixture registry and tables.
///
/// # Panics
/// Panics if the stack fails to assemble.
pub fn standard_stack() -> Vec<Box<dyn ISignal>> {
    standard_signals(shared_registry(), providers(), &config())
        .unwrap_or_else(|e| panic!("standard stack failed to assemble: {e}"))
}
