//! Enrollment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::course::Course;

/// Enrollment row: joins a user to a course
///
/// `user_id`/`course_id` are weak references; uniqueness of the pair is
/// enforced by the store.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
}

/// Enrollment expanded with its course
///
/// `course` is None when the referenced course no longer exists (the
/// catalog may have been reseeded since the enrollment was created).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
    pub course: Option<Course>,
}

/// Enroll request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub course_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enroll_request_accepts_camel_case() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"courseId": "{}"}}"#, id);

        let req: EnrollRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.course_id, id);
    }

    #[test]
    fn test_enrolled_course_serializes_null_course() {
        let entry = EnrolledCourse {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            enrolled_at: Utc::now(),
            course: None,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["course"].is_null());
        assert!(json["courseId"].is_string());
        assert!(json["enrolledAt"].is_string());
    }
}
