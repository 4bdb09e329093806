//! # meridian-ensemble
//!
//! Fuses per-signal country distributions into a posterior with a
//! weighted-logistic model, refits the fusion weights from labelled
//! examples, and cross-validates the result.

pub mod calibration;
pub mod engine;
pub mod eval;
pub mod training;

pub use engine::EnsembleInferrer;
pub use eval::{load_gold_file, parse_gold_tsv, EvalReport, Evaluator};
pub use training::{make_rows, train};
