//! 应用错误模型
//! 处理器统一返回 AppError，到 HTTP 的映射集中在此处

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// 业务与基础设施错误
/// 4xx 变体的 Display 文案即对外文案，变体内部细节只进日志
#[derive(Debug, Error)]
pub enum AppError {
    /// 请求格式正确但业务校验失败，消息原样回给调用方
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// 缺少凭据
    #[error("Authentication required")]
    Unauthorized,

    /// 凭据无效或已过期
    #[error("Access denied")]
    Forbidden,

    #[error("Resource not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    /// HTTP 状态码映射
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Config(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 响应体文案
    /// 5xx 收敛为固定文案，具体原因只出现在日志里
    pub fn user_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Database(_) => "Database error occurred".to_string(),
            AppError::Config(_) => "Configuration error".to_string(),
            other => other.to_string(),
        }
    }

    /// 响应体中的数字错误码，与 HTTP 状态码一致
    pub fn code(&self) -> u16 {
        self.status_code().as_u16()
    }
}

/// 错误响应体
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
    pub request_id: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetail {
                code: status.as_u16(),
                message: self.user_message(),
                request_id: uuid::Uuid::new_v4().to_string(),
            },
        };

        tracing::error!(
            status = status.as_u16(),
            error = %self,
            request_id = %body.error.request_id,
            "Request failed"
        );

        (status, Json(body)).into_response()
    }
}

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Config(s)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}
