use crate::errors::Result;
use crate::goals::goals_model::{GoalProgress, NewRewardGoal, RewardGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait RewardGoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<RewardGoal>>;
    fn load_goals_for_child(&self, child_id: &str) -> Result<Vec<RewardGoal>>;
    fn get_goal(&self, goal_id: &str) -> Result<RewardGoal>;
    async fn insert_new_goal(&self, goal: RewardGoal) -> Result<RewardGoal>;
    /// Whole-record replacement; readers always see a consistent goal.
    async fn update_goal(&self, goal: RewardGoal) -> Result<RewardGoal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait RewardGoalServiceTrait: Send + Sync {
    fn get_goals_for_child(&self, child_id: &str) -> Result<Vec<RewardGoal>>;
    fn get_goal(&self, goal_id: &str) -> Result<RewardGoal>;
    async fn create_goal(&self, new_goal: NewRewardGoal) -> Result<RewardGoal>;
    async fn redeem_goal(&self, goal_id: &str) -> Result<RewardGoal>;
    async fn soft_reset_goal(&self, goal_id: &str) -> Result<RewardGoal>;
    async fn set_priority(&self, goal_id: &str, priority: i32) -> Result<RewardGoal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;
    fn get_progress_for_child(&self, child_id: &str) -> Result<Vec<GoalProgress>>;
    fn get_goal_progress(&self, goal_id: &str) -> Result<GoalProgress>;
}
