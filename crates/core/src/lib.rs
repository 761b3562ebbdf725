//! KidPoints Core - Domain entities, services, and the goal progress engine.
//!
//! This crate contains the core business logic for KidPoints.
//! It is database-agnostic and defines traits that are implemented
//! by a storage crate; the progress engine itself is pure and does no I/O.

pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod progress;

// Re-export the domain surface consumed by app shells
pub use events::{NewPointEvent, PointEvent, PointEventService};
pub use goals::{GoalProgress, GoalStatus, NewRewardGoal, RewardGoal, RewardGoalService};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
