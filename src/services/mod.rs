//! 业务逻辑服务层

pub mod auth_service;
pub mod enrollment_service;

pub use auth_service::AuthService;
pub use enrollment_service::EnrollmentService;
