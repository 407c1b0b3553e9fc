//! 数据库仓储层
//! 封装所有 SQL 访问，服务层不直接拼接查询

pub mod course_repo;
pub mod enrollment_repo;
pub mod user_repo;

pub use course_repo::*;
pub use enrollment_repo::*;
pub use user_repo::*;
