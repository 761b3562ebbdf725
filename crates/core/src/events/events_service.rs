use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::Result;
use crate::events::events_model::{NewPointEvent, PointEvent};
use crate::events::events_traits::{PointEventRepositoryTrait, PointEventServiceTrait};
use async_trait::async_trait;

/// Service for recording and querying point events
pub struct PointEventService {
    event_repository: Arc<dyn PointEventRepositoryTrait>,
}

impl PointEventService {
    pub fn new(event_repository: Arc<dyn PointEventRepositoryTrait>) -> Self {
        Self { event_repository }
    }
}

#[async_trait]
impl PointEventServiceTrait for PointEventService {
    fn get_events_for_child(&self, child_id: &str) -> Result<Vec<PointEvent>> {
        self.event_repository.get_events_for_child(child_id)
    }

    /// Raw signed total for a child, debits included. Goal progress never
    /// uses this number; it is the headline balance shown alongside it.
    fn get_point_balance(&self, child_id: &str) -> Result<i64> {
        let events = self.event_repository.get_events_for_child(child_id)?;
        Ok(events.iter().map(|e| e.amount).sum())
    }

    async fn add_points(&self, new_event: NewPointEvent) -> Result<PointEvent> {
        new_event.validate()?;
        let occurred_at = new_event.occurred_at_datetime()?;

        let event = PointEvent {
            id: new_event
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            child_id: new_event.child_id.clone(),
            amount: new_event.amount,
            occurred_at,
            goal_id: new_event.goal_id.clone(),
            note: new_event.note.clone(),
            created_at: Utc::now(),
        };

        debug!(
            "Recording {} points for child {}",
            event.amount, event.child_id
        );
        self.event_repository.insert_event(event).await
    }

    async fn assign_goal(&self, event_id: &str, goal_id: Option<String>) -> Result<PointEvent> {
        debug!("Assigning event {} to goal {:?}", event_id, goal_id);
        self.event_repository.assign_goal(event_id, goal_id).await
    }

    async fn delete_event(&self, event_id: &str) -> Result<usize> {
        self.event_repository.delete_event(event_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::sync::Mutex;

    struct MockEventRepository {
        events: Mutex<Vec<PointEvent>>,
    }

    impl MockEventRepository {
        fn new(events: Vec<PointEvent>) -> Self {
            Self {
                events: Mutex::new(events),
            }
        }
    }

    #[async_trait]
    impl PointEventRepositoryTrait for MockEventRepository {
        fn get_events(&self) -> Result<Vec<PointEvent>> {
            Ok(self.events.lock().unwrap().clone())
        }

        fn get_events_for_child(&self, child_id: &str) -> Result<Vec<PointEvent>> {
            Ok(self
                .events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.child_id == child_id)
                .cloned()
                .collect())
        }

        fn get_event(&self, event_id: &str) -> Result<PointEvent> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == event_id)
                .cloned()
                .ok_or_else(|| Error::Repository(format!("Event {} not found", event_id)))
        }

        async fn insert_event(&self, event: PointEvent) -> Result<PointEvent> {
            self.events.lock().unwrap().push(event.clone());
            Ok(event)
        }

        async fn assign_goal(
            &self,
            event_id: &str,
            goal_id: Option<String>,
        ) -> Result<PointEvent> {
            let mut events = self.events.lock().unwrap();
            let event = events
                .iter_mut()
                .find(|e| e.id == event_id)
                .ok_or_else(|| Error::Repository(format!("Event {} not found", event_id)))?;
            event.goal_id = goal_id;
            Ok(event.clone())
        }

        async fn delete_event(&self, event_id: &str) -> Result<usize> {
            let mut events = self.events.lock().unwrap();
            let before = events.len();
            events.retain(|e| e.id != event_id);
            Ok(before - events.len())
        }
    }

    fn make_service(events: Vec<PointEvent>) -> PointEventService {
        PointEventService::new(Arc::new(MockEventRepository::new(events)))
    }

    fn make_event(id: &str, child_id: &str, amount: i64) -> PointEvent {
        PointEvent {
            id: id.to_string(),
            child_id: child_id.to_string(),
            amount,
            occurred_at: Utc::now(),
            goal_id: None,
            note: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_add_points_generates_id_and_parses_date() {
        let service = make_service(vec![]);

        let event = service
            .add_points(NewPointEvent {
                id: None,
                child_id: "child_1".to_string(),
                amount: 5,
                occurred_at: "2025-06-15".to_string(),
                goal_id: None,
                note: Some("Made the bed".to_string()),
            })
            .await
            .unwrap();

        assert!(!event.id.is_empty());
        assert_eq!(event.amount, 5);
        assert_eq!(event.occurred_at.to_rfc3339(), "2025-06-15T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_add_points_rejects_zero_amount() {
        let service = make_service(vec![]);

        let result = service
            .add_points(NewPointEvent {
                id: None,
                child_id: "child_1".to_string(),
                amount: 0,
                occurred_at: "2025-06-15".to_string(),
                goal_id: None,
                note: None,
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_add_points_rejects_bad_date() {
        let service = make_service(vec![]);

        let result = service
            .add_points(NewPointEvent {
                id: None,
                child_id: "child_1".to_string(),
                amount: 3,
                occurred_at: "June 15th".to_string(),
                goal_id: None,
                note: None,
            })
            .await;

        assert!(result.is_err());
    }

    #[test]
    fn test_point_balance_includes_debits() {
        let service = make_service(vec![
            make_event("e1", "child_1", 10),
            make_event("e2", "child_1", -4),
            make_event("e3", "child_2", 100),
        ]);

        assert_eq!(service.get_point_balance("child_1").unwrap(), 6);
    }

    #[tokio::test]
    async fn test_assign_goal_retags_event() {
        let service = make_service(vec![make_event("e1", "child_1", 10)]);

        let event = service
            .assign_goal("e1", Some("goal_1".to_string()))
            .await
            .unwrap();

        assert_eq!(event.goal_id.as_deref(), Some("goal_1"));
    }
}
