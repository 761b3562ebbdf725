use crate::errors::Result;
use crate::events::events_model::{NewPointEvent, PointEvent};
use async_trait::async_trait;

/// Trait for point event repository operations
#[async_trait]
pub trait PointEventRepositoryTrait: Send + Sync {
    fn get_events(&self) -> Result<Vec<PointEvent>>;
    fn get_events_for_child(&self, child_id: &str) -> Result<Vec<PointEvent>>;
    fn get_event(&self, event_id: &str) -> Result<PointEvent>;
    async fn insert_event(&self, event: PointEvent) -> Result<PointEvent>;
    /// Retroactively attaches or clears the goal label on an existing event.
    /// This is the only permitted mutation of a recorded event.
    async fn assign_goal(&self, event_id: &str, goal_id: Option<String>) -> Result<PointEvent>;
    async fn delete_event(&self, event_id: &str) -> Result<usize>;
}

/// Trait for point event service operations
#[async_trait]
pub trait PointEventServiceTrait: Send + Sync {
    fn get_events_for_child(&self, child_id: &str) -> Result<Vec<PointEvent>>;
    fn get_point_balance(&self, child_id: &str) -> Result<i64>;
    async fn add_points(&self, new_event: NewPointEvent) -> Result<PointEvent>;
    async fn assign_goal(&self, event_id: &str, goal_id: Option<String>) -> Result<PointEvent>;
    async fn delete_event(&self, event_id: &str) -> Result<usize>;
}
