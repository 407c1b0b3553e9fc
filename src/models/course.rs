//! Course catalog models

use serde::Serialize;
use uuid::Uuid;

/// Course record
///
/// `availability` is a display string, not an enforced capacity.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub instructor: String,
    pub schedule: String,
    pub credits: i32,
    pub availability: String,
}

/// Course data before it is persisted (seeding)
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub code: String,
    pub title: String,
    pub instructor: String,
    pub schedule: String,
    pub credits: i32,
    pub availability: String,
}
