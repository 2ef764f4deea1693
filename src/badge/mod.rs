pub mod award;
pub mod definitions;
pub mod evaluator;

mod errors;

pub use award::award_badge;
pub use definitions::{BadgeCatalog, BadgeDefinition, Requirement, RequirementKind};
pub use errors::CatalogError;
pub use evaluator::{evaluate_badges, evaluate_badges_with_stats, BadgeProgress};
