//! Goals module - domain models, services, and traits.

mod goals_errors;
mod goals_model;
mod goals_service;
mod goals_traits;

pub use goals_errors::{GoalError, Result};
pub use goals_model::{GoalProgress, GoalStatus, NewRewardGoal, RewardGoal};
pub use goals_service::RewardGoalService;
pub use goals_traits::{RewardGoalRepositoryTrait, RewardGoalServiceTrait};
