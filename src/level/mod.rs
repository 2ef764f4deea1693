pub mod ladder;
pub mod resolver;

mod errors;

pub use errors::LadderError;
pub use ladder::{LevelDefinition, LevelLadder};
pub use resolver::{resolve_level, LevelStatus};
