//! 用户资料处理器

use crate::{auth::middleware::AuthContext, error::AppError, middleware::AppState};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// 查询当前用户资料
///
/// 用户 ID 来自令牌，不接受路径参数
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .auth_service
        .get_profile(&auth_context.user_id)
        .await?;

    Ok(Json(user))
}
