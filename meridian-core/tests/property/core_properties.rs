use meridian_core::{CountryRegistry, LookupKey};
use proptest::prelude::*;

fn reference_row(iso: &str, pop: u64, tld: &str, langs: &str) -> String {
    let iso3 = format!("{iso}x");
    format!(
        "{iso}\t{iso3}\t000\tFI\tName-{iso}\tCapital\t1000\t{pop}\tNA\t.{tld}\tUSD\tDollar\t1\t####\t^\\d+$\t{langs}\t0\t\t"
    )
}

/// Distinct lowercase two-letter codes.
fn arb_codes() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z]{2}", 1..20)
        .prop_map(|set| set.into_iter().collect())
}

// ── prior invariants ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn priors_form_a_simplex(
        codes in arb_codes(),
        weights in proptest::collection::vec(0.0f64..100.0, 20),
    ) {
        let reference: Vec<String> = codes
            .iter()
            .map(|iso| reference_row(iso, 1000, iso, "en"))
            .collect();
        // weight rows only for a prefix of the codes; the rest rely on smoothing
        let priors: Vec<String> = codes
            .iter()
            .zip(&weights)
            .filter(|(_, w)| **w > 0.0)
            .map(|(iso, w)| format!("{iso}\t{w}"))
            .collect();
        prop_assume!(!priors.is_empty());

        let registry =
            CountryRegistry::from_tsv(&reference.join("\n"), &priors.join("\n")).unwrap();

        let total: f64 = registry.iter().map(|c| c.prior).sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "sum {total}");
        for c in registry.iter() {
            prop_assert!(c.prior > 0.0, "{} fell to zero", c.iso);
            prop_assert!(c.prior <= 1.0, "{} exceeded one", c.iso);
        }
    }
}

proptest! {
    #[test]
    fn canonicalize_is_idempotent(codes in arb_codes()) {
        let reference: Vec<String> = codes
            .iter()
            .map(|iso| reference_row(iso, 1000, iso, "en"))
            .collect();
        let priors: Vec<String> = codes.iter().map(|iso| format!("{iso}\t1.0")).collect();
        let registry =
            CountryRegistry::from_tsv(&reference.join("\n"), &priors.join("\n")).unwrap();

        for code in &codes {
            if let Some(canonical) = registry.canonicalize(code) {
                let canonical = canonical.to_string();
                prop_assert_eq!(registry.canonicalize(&canonical), Some(canonical.as_str()));
            }
        }
    }
}

// ── key invariants ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn keys_never_panic_and_stay_well_formed(raw in ".{0,80}") {
        let key = LookupKey::new(raw.as_str());
        prop_assert_eq!(key.as_str(), raw.as_str());
        if let Some(tld) = key.tld() {
            prop_assert!(key.host().is_some());
            prop_assert!(!tld.is_empty() && !tld.contains('.'));
        }
        if let Some(domain) = key.registered_domain() {
            let labels = domain.split('.').count();
            prop_assert!((2..=3).contains(&labels), "unexpected label count in {domain}");
            prop_assert!(!domain.starts_with('.') && !domain.ends_with('.'));
        }
    }
}
