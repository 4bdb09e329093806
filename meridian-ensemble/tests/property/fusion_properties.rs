use std::collections::BTreeMap;
use std::sync::Arc;

use meridian_core::config::EnsembleConfig;
use meridian_core::{EnsembleModel, ISignal, LookupKey, SignalOutput};
use meridian_ensemble::EnsembleInferrer;
use proptest::prelude::*;

struct FixedSignal {
    output: SignalOutput,
}

impl ISignal for FixedSignal {
    fn name(&self) -> &str {
        "fixed"
    }

    fn infer(&self, _key: &LookupKey) -> SignalOutput {
        self.output.clone()
    }
}

fn stack_of(outputs: Vec<SignalOutput>) -> Vec<Box<dyn ISignal>> {
    outputs
        .into_iter()
        .map(|output| Box::new(FixedSignal { output }) as Box<dyn ISignal>)
        .collect()
}

/// Sparse distributions over a mix of known, aliased, and unknown codes.
fn arb_output() -> impl Strategy<Value = SignalOutput> {
    let code = prop_oneof![
        Just("us".to_string()),
        Just("gb".to_string()),
        Just("uk".to_string()),
        Just("de".to_string()),
        Just("jp".to_string()),
        "[a-z]{2}",
    ];
    let dist = proptest::collection::btree_map(code, 0.001f64..1.0, 0..5);
    (proptest::bool::ANY, dist).prop_map(|(silent, dist)| {
        if silent {
            SignalOutput::none()
        } else {
            SignalOutput::new(0.9, dist)
        }
    })
}

fn model_of(intercept: f64, coefficients: Vec<f64>) -> EnsembleModel {
    let names = (0..coefficients.len()).map(|i| format!("s{i}")).collect();
    EnsembleModel::new(intercept, coefficients, names).unwrap()
}

proptest! {
    #[test]
    fn posteriors_always_cover_the_registry(
        outputs in proptest::collection::vec(arb_output(), 1..6),
        intercept in -8.0f64..2.0,
    ) {
        let registry = test_fixtures::shared_registry();
        let model = model_of(intercept, vec![1.5; outputs.len()]);
        let inferrer = EnsembleInferrer::new(
            stack_of(outputs),
            model,
            Arc::clone(&registry),
            EnsembleConfig::default(),
        )
        .unwrap();

        let posterior = inferrer.infer(&LookupKey::new("any.example")).unwrap();
        prop_assert_eq!(posterior.probabilities.len(), registry.len());

        let total: f64 = posterior.probabilities.values().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "posterior sums to {}", total);
        for (iso, p) in &posterior.probabilities {
            prop_assert!(*p > 0.0 && *p <= 1.0, "{} got {}", iso, p);
        }
    }
}

proptest! {
    #[test]
    fn alias_mass_is_never_split(weight in 0.001f64..1.0, coefficient in 0.1f64..10.0) {
        let registry = test_fixtures::shared_registry();
        let posterior_for = |code: &str| {
            let mut dist = BTreeMap::new();
            dist.insert(code.to_string(), weight);
            EnsembleInferrer::new(
                stack_of(vec![SignalOutput::new(0.9, dist)]),
                model_of(-4.0, vec![coefficient]),
                Arc::clone(&registry),
                EnsembleConfig::default(),
            )
            .unwrap()
            .infer(&LookupKey::new("any.example"))
            .unwrap()
        };

        prop_assert_eq!(posterior_for("uk"), posterior_for("gb"));
    }
}

proptest! {
    #[test]
    fn calibration_never_moves_the_argmax(
        outputs in proptest::collection::vec(arb_output(), 1..6),
        intercept in -8.0f64..2.0,
        coefficients in proptest::collection::vec(-10.0f64..10.0, 5),
        exponent in 1.0f64..2.0,
    ) {
        let model = model_of(intercept, coefficients[..outputs.len()].to_vec());
        let registry = test_fixtures::shared_registry();
        let infer_with = |exponent: f64, outputs: Vec<SignalOutput>| {
            EnsembleInferrer::new(
                stack_of(outputs),
                model.clone(),
                Arc::clone(&registry),
                EnsembleConfig {
                    calibration_exponent: exponent,
                    ..EnsembleConfig::default()
                },
            )
            .unwrap()
            .infer(&LookupKey::new("any.example"))
            .unwrap()
        };

        let plain = infer_with(1.0, outputs.clone());
        let calibrated = infer_with(exponent, outputs);
        prop_assert_eq!(
            plain.top().map(|(c, _)| c.to_string()),
            calibrated.top().map(|(c, _)| c.to_string())
        );
    }
}
