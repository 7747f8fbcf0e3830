/// Application-level errors
///
/// Startup errors (`Storage`, `Dataset`) are fatal and propagate out of
/// `main`. Anything produced inside the recommendation pipeline is absorbed
/// by the popularity fallback and never reaches the HTTP boundary.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Blob store error: {0}")]
    Storage(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

pub type AppResult<T> = Result<T, AppError>;
