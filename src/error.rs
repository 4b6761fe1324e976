use thiserror::Error;

/// Everything that can end a resolution attempt early. One domain's
/// failure is reported on its own and never aborts the other domains.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("malformed message: {0}")]
    Format(String),
    #[error("transport failure: {0}")]
    Transport(#[from] std::io::Error),
    #[error("no answer, glue or referral for {0}, delegation cannot proceed")]
    NoProgress(String),
    #[error("resolution depth exceeded after {0} steps")]
    DepthExceeded(usize),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
