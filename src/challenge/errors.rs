use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChallengeError {
    #[error("Duplicate challenge id: {0}")]
    DuplicateId(String),

    #[error("Challenge {0} must require a count above zero")]
    ZeroCount(String),

    #[error("Challenge {id} ends on {deadline} before it starts on {starts_on}")]
    InvertedWindow {
        id: String,
        starts_on: NaiveDate,
        deadline: NaiveDate,
    },

    #[error("Challenge {0} needs a positive budget limit")]
    InvalidBudget(String),
}
