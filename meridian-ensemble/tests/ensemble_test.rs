//! End-to-end fusion over the shared fixtures with the shipped model.

use std::sync::Arc;

use meridian_core::errors::InferenceError;
use meridian_core::{EnsembleModel, LookupKey};
use meridian_ensemble::{parse_gold_tsv, EnsembleInferrer};
use meridian_signals::{standard_signals, SignalProviders, WhoisResolution, WhoisTable};

fn inferrer() -> EnsembleInferrer {
    let config = test_fixtures::config();
    EnsembleInferrer::new(
        test_fixtures::standard_stack(),
        config.model.clone(),
        test_fixtures::shared_registry(),
        config.ensemble,
    )
    .unwrap()
}

#[test]
fn shipped_model_places_every_gold_example() {
    let inferrer = inferrer();
    for (key, actual) in parse_gold_tsv(test_fixtures::GOLD_TSV).unwrap() {
        let posterior = inferrer.infer(&key).unwrap();
        let (guess, probability) = posterior.top().unwrap();
        assert_eq!(
            guess,
            actual,
            "{} guessed {guess} at {probability:.3}",
            key.as_str()
        );
    }
}

#[test]
fn posteriors_cover_the_registry_and_sum_to_one() {
    let inferrer = inferrer();
    for (key, _) in parse_gold_tsv(test_fixtures::GOLD_TSV).unwrap() {
        let posterior = inferrer.infer(&key).unwrap();
        assert_eq!(posterior.probabilities.len(), 12);
        let total: f64 = posterior.probabilities.values().sum();
        assert!(
            (total - 1.0).abs() < 1e-9,
            "{} sums to {total}",
            key.as_str()
        );
    }
}

#[test]
fn strong_evidence_earns_high_calibrated_probability() {
    let inferrer = inferrer();

    // ccTLD, parsed WHOIS, and a knowledge-base hit all agree.
    let confident = inferrer.infer(&LookupKey::new("www.admin.ch")).unwrap();
    assert!(confident.probability("ch") > 0.9);

    // Only the ccTLD speaks against a large US prior.
    let contested = inferrer.infer(&LookupKey::new("www.cbc.ca")).unwrap();
    let (guess, probability) = contested.top().unwrap();
    assert_eq!(guess, "ca");
    assert!(
        probability < 0.75,
        "contested example came out at {probability:.3}"
    );
}

#[test]
fn unresolvable_keys_fall_back_to_the_prior() {
    let inferrer = inferrer();
    let posterior = inferrer.infer(&LookupKey::new("not a url")).unwrap();

    assert_eq!(posterior.probabilities.len(), 12);
    let total: f64 = posterior.probabilities.values().sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(posterior.top().map(|(c, _)| c), Some("us"));
}

#[test]
fn legacy_whois_aliases_match_canonical_codes() {
    let posterior_for = |iso: &str| {
        let mut whois = WhoisTable::default();
        whois.insert("example.org", WhoisResolution::Parsed(iso.to_string()));
        let providers = SignalProviders {
            whois: Arc::new(whois),
            ..test_fixtures::providers()
        };
        let registry = test_fixtures::shared_registry();
        let config = test_fixtures::config();
        let stack = standard_signals(Arc::clone(&registry), providers, &config).unwrap();
        EnsembleInferrer::new(stack, config.model.clone(), registry, config.ensemble)
            .unwrap()
            .infer(&LookupKey::new("example.org"))
            .unwrap()
    };

    let via_alias = posterior_for("uk");
    let via_canonical = posterior_for("gb");
    assert_eq!(via_alias, via_canonical);
    assert_eq!(via_alias.top().map(|(c, _)| c), Some("gb"));
}

#[test]
fn stale_models_are_rejected_against_the_stack() {
    let config = test_fixtures::config();
    let short_model = EnsembleModel::new(
        -6.88,
        vec![5.05, 7.22],
        vec!["prior".to_string(), "tld".to_string()],
    )
    .unwrap();

    let err = EnsembleInferrer::new(
        test_fixtures::standard_stack(),
        short_model,
        test_fixtures::shared_registry(),
        config.ensemble,
    );
    assert!(matches!(
        err,
        Err(InferenceError::ModelShapeMismatch {
            signals: 7,
            coefficients: 2
        })
    ));
}

#[test]
fn shipped_equation_reads_as_the_linear_form() {
    assert_eq!(
        inferrer().equation(),
        "-6.88 + 5.05 * prior + 5.85 * whois_parsed + 2.64 * whois_freetext \
         + 3.61 * milgov + 2.76 * knowledge_base + 4.90 * language + 7.22 * tld"
    );
}
