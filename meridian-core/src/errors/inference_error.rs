/// Errors raised during fusion, training, and evaluation.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("degenerate model: every country score underflowed to zero")]
    DegenerateModel,

    #[error("model shape mismatch: {signals} signals but {coefficients} coefficients")]
    ModelShapeMismatch { signals: usize, coefficients: usize },

    #[error("cannot train on an empty example set")]
    EmptyTrainingSet,

    #[error("invalid fold count: {folds}")]
    InvalidFoldCount { folds: usize },
}
