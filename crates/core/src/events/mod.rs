//! Point events module - domain models, services, and traits.

mod events_errors;
mod events_model;
mod events_service;
mod events_traits;

pub use events_errors::{PointEventError, Result};
pub use events_model::{NewPointEvent, PointEvent};
pub use events_service::PointEventService;
pub use events_traits::{PointEventRepositoryTrait, PointEventServiceTrait};
