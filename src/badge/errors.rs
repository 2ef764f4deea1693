use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate badge id: {0}")]
    DuplicateId(String),

    #[error("Badge {0} must reward at least one point")]
    ZeroPoints(String),

    #[error("Badge {0} must have a threshold above zero")]
    ZeroThreshold(String),
}
