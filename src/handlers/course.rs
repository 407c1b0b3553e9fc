//! 课程目录处理器

use crate::{
    error::AppError, middleware::AppState, models::course::NewCourse,
    repository::course_repo::CourseRepository,
};
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

/// 列出课程目录
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let courses = state.enrollment_service.list_available_courses().await?;

    Ok(Json(courses))
}

/// 重建课程目录
///
/// 破坏性操作：清空现有课程后写入内置目录
pub async fn seed_courses(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let repo = CourseRepository::new(state.db.clone());
    let courses = repo.replace_all(&seed_catalog()).await?;

    tracing::info!(count = courses.len(), "Course catalog seeded");

    Ok(Json(json!({
        "message": "Courses seeded successfully",
        "count": courses.len()
    })))
}

/// 内置课程目录
fn seed_catalog() -> Vec<NewCourse> {
    vec![
        NewCourse {
            code: "CS101".to_string(),
            title: "Introduction to Computer Science".to_string(),
            instructor: "Dr. Alan Reyes".to_string(),
            schedule: "Mon/Wed 10:00-11:30".to_string(),
            credits: 3,
            availability: "Open".to_string(),
        },
        NewCourse {
            code: "CS205".to_string(),
            title: "Data Structures and Algorithms".to_string(),
            instructor: "Prof. Mei Lin".to_string(),
            schedule: "Tue/Thu 09:00-10:30".to_string(),
            credits: 4,
            availability: "Open".to_string(),
        },
        NewCourse {
            code: "MATH210".to_string(),
            title: "Linear Algebra".to_string(),
            instructor: "Dr. Sofia Petrov".to_string(),
            schedule: "Mon/Wed/Fri 13:00-14:00".to_string(),
            credits: 3,
            availability: "Open".to_string(),
        },
        NewCourse {
            code: "PHYS150".to_string(),
            title: "Classical Mechanics".to_string(),
            instructor: "Prof. James Okafor".to_string(),
            schedule: "Tue/Thu 14:00-15:30".to_string(),
            credits: 4,
            availability: "Waitlist".to_string(),
        },
        NewCourse {
            code: "ENG120".to_string(),
            title: "Academic Writing".to_string(),
            instructor: "Dr. Hannah Weiss".to_string(),
            schedule: "Fri 10:00-13:00".to_string(),
            credits: 2,
            availability: "Open".to_string(),
        },
        NewCourse {
            code: "HIST101".to_string(),
            title: "World History to 1500".to_string(),
            instructor: "Prof. Diego Morales".to_string(),
            schedule: "Mon/Wed 15:00-16:30".to_string(),
            credits: 3,
            availability: "Closed".to_string(),
        },
    ]
}
