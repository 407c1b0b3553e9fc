//! 用户仓储

use crate::{error::AppError, models::auth::RegisterRequest, models::user::User};
use sqlx::PgPool;
use uuid::Uuid;

pub struct UserRepository {
    db: PgPool,
}

impl UserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 按邮箱精确查找（区分大小写）
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }

    /// 创建用户
    ///
    /// 依赖 email 唯一索引：冲突时返回 None，由调用方决定错误语义。
    /// 单条语句完成检查和插入，并发注册同一邮箱只会成功一个。
    pub async fn create(
        &self,
        req: &RegisterRequest,
        password_hash: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, full_name, email, phone_number, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.full_name)
        .bind(&req.email)
        .bind(&req.phone_number)
        .bind(password_hash)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }
}
