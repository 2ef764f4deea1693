use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LadderError {
    #[error("Level ladder is empty")]
    Empty,

    #[error("Lowest level must start at 0 points, found {0}")]
    DoesNotStartAtZero(u64),

    #[error("Level {found} follows level {previous}; levels must increase by one")]
    NonConsecutiveLevels { previous: u32, found: u32 },

    #[error("Level {0} has max points below its min points")]
    InvertedRange(u32),

    #[error("Level {next} must start right after level {previous} ends")]
    Gap { previous: u32, next: u32 },

    #[error("Only the top level may be unbounded, level {0} is not the top")]
    UnboundedBelowTop(u32),
}
