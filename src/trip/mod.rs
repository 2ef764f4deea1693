// Public API - what other modules can use
pub use models::{trips_for_user, Activity, ActivityCategory, Stop, Trip, UserProfile};
pub use repository::{InMemoryTravelRepository, TravelRepository, TravelSnapshot};

// Internal modules
pub mod models;
pub mod repository;
