pub mod errors;
pub mod evaluator;
pub mod models;
pub mod region;

pub use errors::ChallengeError;
pub use evaluator::evaluate_challenges;
pub use models::{
    default_challenges, validate_challenges, ChallengeDefinition, ChallengeProgress,
    ChallengeRequirement, ChallengeStatus,
};
pub use region::{region_of, Region};
