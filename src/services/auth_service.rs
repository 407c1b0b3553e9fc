//! 认证服务
//! 负责注册、登录和资料查询

use crate::{
    auth::{jwt::JwtService, password::PasswordHasher},
    error::AppError,
    models::auth::{LoginRequest, LoginResponse, RegisterRequest},
    models::user::UserResponse,
    repository::user_repo::UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// 登录失败统一返回相同错误，避免泄露邮箱是否存在
fn invalid_credentials() -> AppError {
    AppError::BadRequest("Invalid credentials".to_string())
}

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
    password_hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            db,
            jwt_service,
            password_hasher: PasswordHasher::new(),
        }
    }

    /// 注册新用户
    ///
    /// 邮箱已存在时返回 400，明文密码不落库
    pub async fn register(&self, req: &RegisterRequest) -> Result<UserResponse, AppError> {
        let password_hash = self.password_hasher.hash(&req.password)?;

        let repo = UserRepository::new(self.db.clone());
        let user = repo
            .create(req, &password_hash)
            .await?
            .ok_or_else(|| AppError::BadRequest("Email already registered".to_string()))?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(UserResponse::from(user))
    }

    /// 登录并签发令牌
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        let repo = UserRepository::new(self.db.clone());
        let user = repo
            .find_by_email(&req.email)
            .await?
            .ok_or_else(invalid_credentials)?;

        // 密码不匹配与邮箱不存在返回同一错误
        if self
            .password_hasher
            .verify(&req.password, &user.password_hash)
            .is_err()
        {
            return Err(invalid_credentials());
        }

        let token = self.jwt_service.issue(&user.id, &user.email)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    /// 查询用户资料
    pub async fn get_profile(&self, user_id: &Uuid) -> Result<UserResponse, AppError> {
        let repo = UserRepository::new(self.db.clone());
        let user = repo.find_by_id(user_id).await?.ok_or(AppError::NotFound)?;

        Ok(UserResponse::from(user))
    }
}
