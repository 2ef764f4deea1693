pub mod ranker;

pub use ranker::{rank_users, LeaderboardEntry};
