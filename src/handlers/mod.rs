//! HTTP 请求处理器

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod health;
pub mod metrics;
pub mod user;
