//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, middleware::AppState};

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查）
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // 认证路由（无需携带令牌）
    let auth_routes = Router::new()
        .route("/api/register", post(handlers::auth::register))
        .route("/api/login", post(handlers::auth::login));

    // 课程目录重建（破坏性操作，无需认证）
    let seed_routes = Router::new().route("/api/seed-courses", post(handlers::course::seed_courses));

    // 需要认证的路由
    let authenticated_routes = Router::new()
        .route("/api/profile", get(handlers::user::get_profile))
        .route("/api/courses", get(handlers::course::list_courses))
        .route(
            "/api/enrolled-courses",
            get(handlers::enrollment::list_enrolled_courses),
        )
        .route("/api/enroll", post(handlers::enrollment::enroll))
        .layer(axum::middleware::from_fn_with_state(
            state.jwt_service.clone(),
            crate::auth::middleware::jwt_auth_middleware,
        ));

    // 指标端点
    let metrics_routes = Router::new().route("/metrics", get(handlers::metrics::metrics_export));

    // CORS：浏览器前端直接调用 API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    // 组合所有路由
    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(seed_routes)
        .merge(authenticated_routes)
        .merge(metrics_routes)
        .layer(cors)
        .layer(axum::middleware::from_fn(
            crate::middleware::request_tracking_middleware,
        ))
        .with_state(state)
}
