pub mod data_error;
pub mod inference_error;

pub use data_error::DataError;
pub use inference_error::InferenceError;

/// Unified error type for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum MeridianError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Convenience alias used by every fallible operation in the workspace.
pub type MeridianResult<T> = Result<T, MeridianError>;
