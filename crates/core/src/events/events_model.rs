use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::events::events_errors::PointEventError;

/// Domain model representing a single point entry in a child's log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointEvent {
    pub id: String,
    pub child_id: String,
    /// Signed amount: positive entries are credits, negative entries debits
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
    /// Explicit goal assignment; untagged events accrue to the primary goal
    pub goal_id: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PointEvent {
    /// Only credits count toward goal progress
    pub fn is_credit(&self) -> bool {
        self.amount > 0
    }
}

/// Input model for recording a new point event
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPointEvent {
    pub id: Option<String>,
    pub child_id: String,
    pub amount: i64,
    pub occurred_at: String,
    pub goal_id: Option<String>,
    pub note: Option<String>,
}

impl NewPointEvent {
    /// Validates the new event data
    pub fn validate(&self) -> crate::events::Result<()> {
        if self.child_id.trim().is_empty() {
            return Err(PointEventError::InvalidData(
                "Child ID cannot be empty".to_string(),
            ));
        }
        if self.amount == 0 {
            return Err(PointEventError::InvalidData(
                "Amount cannot be zero".to_string(),
            ));
        }
        if DateTime::parse_from_rfc3339(&self.occurred_at).is_err()
            && NaiveDate::parse_from_str(&self.occurred_at, "%Y-%m-%d").is_err()
        {
            return Err(PointEventError::InvalidData(
                "Invalid date format. Expected ISO 8601/RFC3339 or YYYY-MM-DD".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses `occurred_at`, accepting RFC3339 or a plain date at midnight UTC
    pub fn occurred_at_datetime(&self) -> crate::events::Result<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.occurred_at) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.occurred_at, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| {
                PointEventError::InvalidData(format!(
                    "Could not parse event date '{}'",
                    self.occurred_at
                ))
            })
    }
}
