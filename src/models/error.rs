use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The user cancelled an in-flight prompt (Ctrl+C). There is no
    /// recovery path; the process exits non-zero.
    #[error("prompt cancelled by user")]
    PromptCancelled,
}
