pub mod aggregator;
pub mod models;

pub use aggregator::compute_stats;
pub use models::TravelStats;
