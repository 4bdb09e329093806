use std::path::PathBuf;

/// Errors raised while loading reference data and configuration.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("country reference contains no rows")]
    EmptyRegistry,

    #[error("prior weights are empty or sum to zero")]
    EmptyPriors,

    #[error("malformed country row at line {line}: expected at least 16 fields, found {found}")]
    MalformedCountryRow { line: usize, found: usize },

    #[error("malformed prior row at line {line}: expected code and weight")]
    MalformedPriorRow { line: usize },

    #[error("malformed gold row at line {line}: expected key and country")]
    MalformedGoldRow { line: usize },

    #[error("invalid population at line {line}: {value:?}")]
    InvalidPopulation { line: usize, value: String },

    #[error("invalid prior weight at line {line}: {value:?}")]
    InvalidWeight { line: usize, value: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
