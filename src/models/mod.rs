//! 数据模型模块
//! 用户、课程、选课记录以及认证相关的请求/响应类型

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod user;
