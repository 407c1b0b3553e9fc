//! PostgreSQL 接入层
//! 负责连接池构建、启动迁移和就绪检查

use crate::config::DatabaseConfig;
use secrecy::ExposeSecret;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// 创建连接池，池参数全部来自配置
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
        .connect(config.url.expose_secret())
        .await
        .map_err(|e| {
            tracing::error!("Database pool creation failed: {}", e);
            DbError::ConnectionFailed(e.to_string())
        })?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database pool ready"
    );

    Ok(pool)
}

/// 应用 ./migrations 下的全部迁移（users、courses、enrollments）
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!("Migration failed: {}", e);
            DbError::MigrationFailed(e.to_string())
        })?;

    tracing::info!("Database migrations applied");
    Ok(())
}

/// 就绪检查，执行一次最小查询验证连接可用
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    if let Err(e) = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        tracing::warn!("Database health check failed: {}", e);
        return Err(e);
    }
    Ok(())
}

/// 把连接池水位写入 gauge
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as f64;
    let idle = pool.num_idle() as f64;
    metrics::gauge!("db.pool.size").set(size);
    metrics::gauge!("db.pool.idle").set(idle);
}

/// 数据库初始化阶段的错误
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}
