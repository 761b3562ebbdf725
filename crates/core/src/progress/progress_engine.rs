use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::events::PointEvent;
use crate::goals::{GoalProgress, GoalStatus, RewardGoal};
use crate::progress::milestones;

/// Sums the qualifying credits for a goal and applies its earning multiplier.
///
/// Redeemed goals report their frozen value and ignore the log entirely. For
/// everything else, an event qualifies when it belongs to the goal's child,
/// falls inside the `[window_start, deadline]` window (both bounds
/// inclusive), and is attributed to this goal: a tagged event must name it,
/// an untagged event only counts for the primary goal. Debits never reduce
/// the result. The discounted sum is truncated toward zero and capped at the
/// target, so a goal reads "10 of 10" rather than overshooting.
pub fn earned_points(goal: &RewardGoal, events: &[PointEvent], is_primary: bool) -> i64 {
    if goal.redeemed {
        return goal.frozen_earned_points.unwrap_or_default();
    }

    let sum: i64 = events
        .iter()
        .filter(|e| e.child_id == goal.child_id)
        .filter(|e| e.is_credit())
        .filter(|e| e.occurred_at >= goal.window_start)
        .filter(|e| goal.deadline.map(|d| e.occurred_at <= d).unwrap_or(true))
        .filter(|e| match &e.goal_id {
            Some(goal_id) => *goal_id == goal.id,
            None => is_primary,
        })
        .map(|e| e.amount)
        .sum();

    // The multiplier is in (0, 1], so the discounted sum still fits in i64
    let earned = (Decimal::from(sum) * goal.earning_multiplier)
        .trunc()
        .to_i64()
        .unwrap_or_default();

    if goal.target_points > 0 {
        earned.min(goal.target_points)
    } else {
        earned
    }
}

/// Resolves the lifecycle status for a goal.
///
/// The guards run in precedence order and the first match wins: redemption
/// beats expiry, expiry beats readiness, readiness beats the deadline and
/// default flavors of the active state. A non-positive target can never
/// satisfy the readiness test.
pub fn resolve_status(goal: &RewardGoal, earned_points: i64, now: DateTime<Utc>) -> GoalStatus {
    if goal.redeemed {
        return GoalStatus::Completed;
    }
    if goal.is_expired(now) {
        return GoalStatus::Expired;
    }
    if goal.target_points > 0 && earned_points >= goal.target_points {
        return GoalStatus::ReadyToRedeem;
    }
    if goal.has_deadline() {
        return GoalStatus::ActiveWithDeadline;
    }
    GoalStatus::Active
}

/// Fraction of the target reached, clamped to [0, 1]. Zero for unsatisfiable
/// targets so the division is never attempted.
pub fn progress_ratio(goal: &RewardGoal, earned_points: i64) -> Decimal {
    if goal.target_points <= 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(earned_points) / Decimal::from(goal.target_points))
        .clamp(Decimal::ZERO, Decimal::ONE)
}

/// Points still missing before the goal can be redeemed
pub fn remaining_points(goal: &RewardGoal, earned_points: i64) -> i64 {
    (goal.target_points - earned_points).max(0)
}

/// Orders a child's non-terminal goals by ascending priority.
///
/// The sort is stable, so goals sharing a priority keep their input order
/// and selection stays deterministic across re-evaluations. Index 0 is the
/// primary goal; untagged events accrue to it alone. Nothing is marked in
/// storage; callers recompute this on every evaluation.
pub fn primary_order(goals: &[RewardGoal], now: DateTime<Utc>) -> Vec<&RewardGoal> {
    let mut open: Vec<&RewardGoal> = goals.iter().filter(|g| !g.is_terminal(now)).collect();
    open.sort_by_key(|g| g.priority);
    open
}

/// Id of the goal currently receiving untagged events, if any
pub fn primary_goal_id(goals: &[RewardGoal], now: DateTime<Utc>) -> Option<&str> {
    primary_order(goals, now).first().map(|g| g.id.as_str())
}

/// Full progress evaluation for one goal against one snapshot and clock
/// reading. Status, ratio and milestone fields all derive from the same
/// earned-points value, so callers can never see them disagree.
pub fn evaluate(
    goal: &RewardGoal,
    events: &[PointEvent],
    is_primary: bool,
    now: DateTime<Utc>,
) -> GoalProgress {
    let earned = earned_points(goal, events, is_primary);
    GoalProgress {
        goal_id: goal.id.clone(),
        status: resolve_status(goal, earned, now),
        earned_points: earned,
        progress: progress_ratio(goal, earned),
        remaining_points: remaining_points(goal, earned),
        milestones: milestones::milestones(goal.target_points),
        milestones_reached: milestones::milestones_reached(goal.target_points, earned),
        next_milestone: milestones::next_milestone(goal.target_points, earned),
    }
}
