/// Meridian engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Top-level domains that are sold globally and carry no reliable
/// geographic information despite being country-code TLDs.
pub const GENERIC_TLDS: &[&str] = &[
    "ad", "as", "bz", "cc", "cd", "co", "dj", "fm", "io", "la", "me", "ms", "nu", "sc", "sr",
    "su", "tv", "tk", "ws", "int",
];

/// Canonical ordering of the standard signal stack. Trained coefficient
/// vectors are positional, so this order is part of the model format.
pub const STANDARD_SIGNAL_ORDER: &[&str] = &[
    "prior",
    "whois_parsed",
    "whois_freetext",
    "milgov",
    "knowledge_base",
    "language",
    "tld",
];

/// Smallest posterior mass considered renormalizable. Totals at or below
/// this are treated as a degenerate model rather than divided through.
pub const RENORMALIZATION_EPSILON: f64 = 1e-12;

/// Additive slack used when renormalizing ranked language-model scores.
pub const SCORE_SUM_EPSILON: f64 = 1e-6;

/// Additive smoothing applied to country prior weights, scaled by 1/N.
pub const PRIOR_SMOOTHING: f64 = 0.01;
