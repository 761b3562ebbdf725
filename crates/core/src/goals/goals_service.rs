use chrono::{DateTime, Utc};
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::constants::INITIAL_EARNING_MULTIPLIER;
use crate::errors::Result;
use crate::events::{PointEvent, PointEventRepositoryTrait};
use crate::goals::goals_errors::GoalError;
use crate::goals::goals_model::{GoalProgress, NewRewardGoal, RewardGoal};
use crate::goals::goals_traits::{RewardGoalRepositoryTrait, RewardGoalServiceTrait};
use crate::progress;
use async_trait::async_trait;

/// Service for managing reward goals and answering progress queries
pub struct RewardGoalService {
    goal_repository: Arc<dyn RewardGoalRepositoryTrait>,
    event_repository: Arc<dyn PointEventRepositoryTrait>,
}

impl RewardGoalService {
    /// Creates a new RewardGoalService instance with injected dependencies
    pub fn new(
        goal_repository: Arc<dyn RewardGoalRepositoryTrait>,
        event_repository: Arc<dyn PointEventRepositoryTrait>,
    ) -> Self {
        Self {
            goal_repository,
            event_repository,
        }
    }

    /// Evaluates every goal of a child against one snapshot and one clock
    /// reading, so the primary selection and all progress values agree.
    fn evaluate_goals(
        goals: &[RewardGoal],
        events: &[PointEvent],
        now: DateTime<Utc>,
    ) -> Vec<GoalProgress> {
        let primary_id = progress::primary_goal_id(goals, now).map(str::to_string);
        goals
            .iter()
            .map(|goal| {
                let is_primary = primary_id.as_deref() == Some(goal.id.as_str());
                progress::evaluate(goal, events, is_primary, now)
            })
            .collect()
    }
}

#[async_trait]
impl RewardGoalServiceTrait for RewardGoalService {
    fn get_goals_for_child(&self, child_id: &str) -> Result<Vec<RewardGoal>> {
        self.goal_repository.load_goals_for_child(child_id)
    }

    fn get_goal(&self, goal_id: &str) -> Result<RewardGoal> {
        self.goal_repository.get_goal(goal_id)
    }

    async fn create_goal(&self, new_goal: NewRewardGoal) -> Result<RewardGoal> {
        new_goal.validate()?;
        let deadline = new_goal.deadline_datetime()?;
        let now = Utc::now();

        // New goals queue behind the child's existing ones unless told otherwise
        let priority = match new_goal.priority {
            Some(priority) => priority,
            None => self
                .goal_repository
                .load_goals_for_child(&new_goal.child_id)?
                .iter()
                .map(|g| g.priority)
                .max()
                .map(|p| p + 1)
                .unwrap_or(0),
        };

        let goal = RewardGoal {
            id: new_goal
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            child_id: new_goal.child_id.clone(),
            title: new_goal.title.clone(),
            description: new_goal.description.clone(),
            target_points: new_goal.target_points,
            created_at: now,
            window_start: now,
            deadline,
            redeemed: false,
            redeemed_at: None,
            frozen_earned_points: None,
            earning_multiplier: INITIAL_EARNING_MULTIPLIER,
            priority,
        };

        debug!(
            "Creating goal '{}' for child {} with target {}",
            goal.title, goal.child_id, goal.target_points
        );
        self.goal_repository.insert_new_goal(goal).await
    }

    /// Freezes the goal's earned points and marks it completed. The earned
    /// value is computed against the same snapshot that decides whether the
    /// goal is currently primary, so the frozen number matches what the
    /// family saw on screen.
    async fn redeem_goal(&self, goal_id: &str) -> Result<RewardGoal> {
        let goal = self.goal_repository.get_goal(goal_id)?;
        if goal.redeemed {
            return Err(GoalError::AlreadyRedeemed(goal_id.to_string()).into());
        }

        let now = Utc::now();
        let siblings = self.goal_repository.load_goals_for_child(&goal.child_id)?;
        let events = self.event_repository.get_events_for_child(&goal.child_id)?;
        let is_primary = progress::primary_goal_id(&siblings, now) == Some(goal.id.as_str());
        let earned = progress::earned_points(&goal, &events, is_primary);

        debug!("Redeeming goal {} with {} earned points", goal_id, earned);
        self.goal_repository
            .update_goal(goal.redeem(earned, now))
            .await
    }

    async fn soft_reset_goal(&self, goal_id: &str) -> Result<RewardGoal> {
        let goal = self.goal_repository.get_goal(goal_id)?;
        if goal.redeemed {
            return Err(GoalError::AlreadyRedeemed(goal_id.to_string()).into());
        }

        debug!("Soft-resetting goal {}", goal_id);
        self.goal_repository
            .update_goal(goal.soft_reset(Utc::now()))
            .await
    }

    async fn set_priority(&self, goal_id: &str, priority: i32) -> Result<RewardGoal> {
        let mut goal = self.goal_repository.get_goal(goal_id)?;
        goal.priority = priority;
        self.goal_repository.update_goal(goal).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        self.goal_repository.delete_goal(goal_id).await
    }

    fn get_progress_for_child(&self, child_id: &str) -> Result<Vec<GoalProgress>> {
        let goals = self.goal_repository.load_goals_for_child(child_id)?;
        let events = self.event_repository.get_events_for_child(child_id)?;
        Ok(Self::evaluate_goals(&goals, &events, Utc::now()))
    }

    fn get_goal_progress(&self, goal_id: &str) -> Result<GoalProgress> {
        let goal = self.goal_repository.get_goal(goal_id)?;
        let siblings = self.goal_repository.load_goals_for_child(&goal.child_id)?;
        let events = self.event_repository.get_events_for_child(&goal.child_id)?;
        let now = Utc::now();
        let is_primary = progress::primary_goal_id(&siblings, now) == Some(goal.id.as_str());
        Ok(progress::evaluate(&goal, &events, is_primary, now))
    }
}
