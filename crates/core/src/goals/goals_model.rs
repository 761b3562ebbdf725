//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::SOFT_RESET_EARNING_FACTOR;
use crate::goals::goals_errors::GoalError;

/// Lifecycle status derived for a goal at query time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    Active,             // Accruing, no deadline
    ActiveWithDeadline, // Accruing against a deadline
    ReadyToRedeem,      // Target met, awaiting the parent's redeem action
    Completed,          // Redeemed; earned points frozen
    Expired,            // Deadline passed without redemption
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "ACTIVE",
            GoalStatus::ActiveWithDeadline => "ACTIVE_WITH_DEADLINE",
            GoalStatus::ReadyToRedeem => "READY_TO_REDEEM",
            GoalStatus::Completed => "COMPLETED",
            GoalStatus::Expired => "EXPIRED",
        }
    }

    /// Terminal goals never accrue points again
    pub fn is_terminal(&self) -> bool {
        matches!(self, GoalStatus::Completed | GoalStatus::Expired)
    }
}

/// Domain model representing a reward goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardGoal {
    pub id: String,
    pub child_id: String,
    pub title: String,
    pub description: Option<String>,
    /// A target of zero or less is never satisfiable and reports zero progress
    pub target_points: i64,
    pub created_at: DateTime<Utc>,
    /// Start of the earning window; only ever moves forward (soft reset)
    pub window_start: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    pub redeemed: bool,
    pub redeemed_at: Option<DateTime<Utc>>,
    /// Earned points captured at redemption; fixed forever afterwards
    pub frozen_earned_points: Option<i64>,
    /// In (0, 1]; halved by every soft reset
    pub earning_multiplier: Decimal,
    /// Lower sorts first when picking the primary goal
    pub priority: i32,
}

impl RewardGoal {
    pub fn has_deadline(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once `now` is strictly past the deadline of an unredeemed goal
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.redeemed && self.deadline.map(|d| now > d).unwrap_or(false)
    }

    /// Redeemed or expired goals no longer take part in primary selection
    pub fn is_terminal(&self, now: DateTime<Utc>) -> bool {
        self.redeemed || self.is_expired(now)
    }

    /// Marks the goal redeemed, freezing its earned points in the same step.
    /// Produces a replacement record; the store persists it atomically.
    pub fn redeem(self, earned_points: i64, now: DateTime<Utc>) -> RewardGoal {
        RewardGoal {
            redeemed: true,
            redeemed_at: Some(now),
            frozen_earned_points: Some(earned_points),
            ..self
        }
    }

    /// Forgives a missed window: halves the earning multiplier, restarts the
    /// window at `now` and clears any deadline. Repeated resets compound.
    pub fn soft_reset(self, now: DateTime<Utc>) -> RewardGoal {
        RewardGoal {
            earning_multiplier: self.earning_multiplier * SOFT_RESET_EARNING_FACTOR,
            window_start: now,
            deadline: None,
            ..self
        }
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewRewardGoal {
    pub id: Option<String>,
    pub child_id: String,
    pub title: String,
    pub description: Option<String>,
    pub target_points: i64,
    pub deadline: Option<String>,
    pub priority: Option<i32>,
}

impl NewRewardGoal {
    /// Validates the new goal data
    pub fn validate(&self) -> crate::goals::Result<()> {
        if self.child_id.trim().is_empty() {
            return Err(GoalError::InvalidData(
                "Child ID cannot be empty".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(GoalError::InvalidData("Title cannot be empty".to_string()));
        }
        if self.target_points <= 0 {
            return Err(GoalError::InvalidData(
                "Target points must be positive".to_string(),
            ));
        }
        if let Some(deadline) = &self.deadline {
            if DateTime::parse_from_rfc3339(deadline).is_err()
                && NaiveDate::parse_from_str(deadline, "%Y-%m-%d").is_err()
            {
                return Err(GoalError::InvalidData(
                    "Invalid deadline format. Expected ISO 8601/RFC3339 or YYYY-MM-DD".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Parses the deadline, accepting RFC3339 or a plain date at end of day UTC
    pub fn deadline_datetime(&self) -> crate::goals::Result<Option<DateTime<Utc>>> {
        let Some(deadline) = &self.deadline else {
            return Ok(None);
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(deadline) {
            return Ok(Some(dt.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(deadline, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .map(|naive| Some(naive.and_utc()))
            .ok_or_else(|| {
                GoalError::InvalidData(format!("Could not parse deadline '{}'", deadline))
            })
    }
}

/// Progress evaluation for a single goal at one instant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub status: GoalStatus,
    pub earned_points: i64,
    /// Fraction of the target reached, clamped to [0, 1]
    pub progress: Decimal,
    pub remaining_points: i64,
    pub milestones: Vec<i64>,
    pub milestones_reached: Vec<i64>,
    pub next_milestone: Option<i64>,
}
