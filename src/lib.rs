//! 选课门户服务库
//! 提供共享类型和工具

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
pub mod auth;
pub mod models;
pub mod repository;
pub mod services;
