//! Default values for every tunable in the workspace, kept in one place
//! so config structs and docs never disagree.

/// Shipped fusion intercept, fitted on the reference gold set.
pub const DEFAULT_INTERCEPT: f64 = -6.88;

/// Shipped fusion coefficients, one per signal in the standard order.
pub const DEFAULT_COEFFICIENTS: [f64; 7] = [5.05, 5.85, 2.64, 3.61, 2.76, 4.90, 7.22];

/// Exponent applied to logistic outputs before renormalization. Values
/// above 1.0 sharpen the distribution without moving the argmax.
pub const DEFAULT_CALIBRATION_EXPONENT: f64 = 1.2;

/// Uninformative signals contribute a uniform 1/N instead of nothing.
pub const DEFAULT_UNIFORM_FALLBACK: bool = true;

// ── per-signal confidences ──────────────────────────────────────────────

pub const DEFAULT_PRIOR_CONFIDENCE: f64 = 0.2;
pub const DEFAULT_TLD_CONFIDENCE: f64 = 0.95;
pub const DEFAULT_MILGOV_CONFIDENCE: f64 = 1.0;
pub const DEFAULT_LANGUAGE_CONFIDENCE: f64 = 0.70;
pub const DEFAULT_GEOIP_CONFIDENCE: f64 = 0.80;
pub const DEFAULT_KNOWLEDGE_BASE_CONFIDENCE: f64 = 0.99;
pub const DEFAULT_WHOIS_PARSED_CONFIDENCE: f64 = 0.60;
pub const DEFAULT_WHOIS_FREETEXT_CONFIDENCE: f64 = 0.60;

// ── language model ──────────────────────────────────────────────────────

/// Rank decay exponent: a country's weight for its i-th language is
/// divided by (i + 1) raised to this power.
pub const DEFAULT_RANK_DECAY: f64 = 2.5;

// ── training ────────────────────────────────────────────────────────────

pub const DEFAULT_LEARNING_RATE: f64 = 0.5;
pub const DEFAULT_EPOCHS: usize = 500;
pub const DEFAULT_L2_PENALTY: f64 = 1e-4;

// ── evaluation ──────────────────────────────────────────────────────────

pub const DEFAULT_FOLDS: usize = 7;
