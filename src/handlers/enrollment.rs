//! 选课处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::{AppJson, AppState},
    models::enrollment::EnrollRequest,
};
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

/// 列出当前用户已选课程
pub async fn list_enrolled_courses(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let entries = state
        .enrollment_service
        .list_enrollments(&auth_context.user_id)
        .await?;

    Ok(Json(entries))
}

/// 选课
pub async fn enroll(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    AppJson(req): AppJson<EnrollRequest>,
) -> Result<impl IntoResponse, AppError> {
    let enrollment = state
        .enrollment_service
        .enroll(&auth_context.user_id, &req.course_id)
        .await?;

    Ok(Json(json!({
        "message": "Enrolled successfully",
        "enrollment": enrollment
    })))
}
