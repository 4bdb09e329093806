use std::sync::Arc;

use meridian_core::config::LanguageModelConfig;
use meridian_core::{CountryRegistry, ISignal, LookupKey};
use meridian_signals::signals::FreetextWhoisSignal;
use meridian_signals::{LanguageCountryModel, WhoisResolution, WhoisTable};
use proptest::prelude::*;

fn reference_row(iso: &str, pop: u64, langs: &str) -> String {
    format!(
        "{iso}\t{iso}x\t000\tFI\tName-{iso}\tCapital\t1000\t{pop}\tNA\t.{iso}\tUSD\tDollar\t1\t####\t^\\d+$\t{langs}\t0\t\t"
    )
}

fn arb_codes() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z]{2}", 2..15)
        .prop_map(|set| set.into_iter().collect())
}

// ── language model invariants ───────────────────────────────────────

proptest! {
    #[test]
    fn language_lists_stay_normalized_and_sorted(
        codes in arb_codes(),
        lang_picks in proptest::collection::vec(0usize..4, 2..15),
    ) {
        let langs = ["en", "fr", "de", "es"];
        let reference: Vec<String> = codes
            .iter()
            .zip(lang_picks.iter().cycle())
            .map(|(iso, pick)| reference_row(iso, 1_000_000, langs[*pick]))
            .collect();
        let priors: Vec<String> = codes.iter().map(|iso| format!("{iso}\t1.0")).collect();
        let registry =
            CountryRegistry::from_tsv(&reference.join("\n"), &priors.join("\n")).unwrap();

        let model =
            LanguageCountryModel::from_registry(&registry, &LanguageModelConfig::default());

        for lang in langs {
            let Some(list) = model.get(lang) else { continue };
            prop_assert!(!list.is_empty());

            let total: f64 = list.iter().map(|(_, share)| share).sum();
            prop_assert!(total <= 1.0 + 1e-12, "{} sums to {}", lang, total);
            prop_assert!(total > 0.0, "{} sums to {}", lang, total);

            for pair in list.windows(2) {
                prop_assert!(pair[0].1 >= pair[1].1, "{} out of order", lang);
            }
            for (_, share) in list {
                prop_assert!(*share > 0.0 && *share <= 1.0);
            }
        }
    }
}

// ── signal output invariants ────────────────────────────────────────

proptest! {
    #[test]
    fn stack_never_panics_and_emits_bounded_mass(raw in ".{0,60}") {
        let key = LookupKey::new(raw.as_str());
        for signal in test_fixtures::standard_stack() {
            let out = signal.infer(&key);
            prop_assert!(
                (0.0..=1.0).contains(&out.confidence),
                "{} confidence {}",
                signal.name(),
                out.confidence
            );
            let total: f64 = out.distribution.values().sum();
            prop_assert!(
                total <= 1.0 + 1e-9,
                "{} emitted mass {}",
                signal.name(),
                total
            );
            for (iso, weight) in &out.distribution {
                prop_assert!(*weight > 0.0, "{} emitted {} for {}", signal.name(), weight, iso);
            }
        }
    }
}

proptest! {
    #[test]
    fn freetext_proportions_always_sum_to_one(
        counts in proptest::collection::btree_map("[a-z]{2}", 1u32..50, 1..6),
    ) {
        let mut table = WhoisTable::default();
        table.insert(
            "counted.example",
            WhoisResolution::Freetext(counts.into_iter().collect()),
        );
        let signal = FreetextWhoisSignal::new(Arc::new(table), 0.6);

        let out = signal.infer(&LookupKey::new("counted.example"));
        let total: f64 = out.distribution.values().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "proportions sum to {}", total);
    }
}
