pub mod trip_builders;
pub mod setup;

// Re-export main utilities for use by test files
pub use setup::{TestSetup, TestSetupBuilder};
pub use trip_builders::TripBuilder;
