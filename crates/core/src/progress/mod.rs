//! Goal progress engine - pure evaluation of reward goals against the point log.
//!
//! Every function here is a deterministic function of its arguments. The
//! current time is always a parameter, never read from a system clock, and
//! nothing in this module performs I/O or mutates its inputs.

mod milestones;
mod progress_engine;

pub use milestones::{just_crossed, milestones, milestones_reached, next_milestone};
pub use progress_engine::{
    earned_points, evaluate, primary_goal_id, primary_order, progress_ratio, remaining_points,
    resolve_status,
};
