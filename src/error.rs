use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureStatusError {
    #[error("Capabilities Reply Decode")]
    InvalidReply,
    #[error("Capabilities Reply Failed With Status {0}")]
    FailedReply(i64),
    #[error("Features Section Missing")]
    MissingFeatures,
}
