//! 选课服务
//! 课程目录查询与选课登记

use crate::{
    error::AppError,
    models::course::Course,
    models::enrollment::{EnrolledCourse, Enrollment},
    repository::{course_repo::CourseRepository, enrollment_repo::EnrollmentRepository},
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct EnrollmentService {
    db: PgPool,
}

impl EnrollmentService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出课程目录
    pub async fn list_available_courses(&self) -> Result<Vec<Course>, AppError> {
        let repo = CourseRepository::new(self.db.clone());
        repo.list().await
    }

    /// 列出用户已选课程
    pub async fn list_enrollments(&self, user_id: &Uuid) -> Result<Vec<EnrolledCourse>, AppError> {
        let repo = EnrollmentRepository::new(self.db.clone());
        repo.list_with_courses(user_id).await
    }

    /// 为用户登记一门课程
    ///
    /// 每个 (user_id, course_id) 只允许一条记录，重复选课返回 400。
    /// course_id 不校验存在性，选不存在的课程同样成功。
    pub async fn enroll(&self, user_id: &Uuid, course_id: &Uuid) -> Result<Enrollment, AppError> {
        let repo = EnrollmentRepository::new(self.db.clone());
        let enrollment = repo
            .insert(user_id, course_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Already enrolled in this course".to_string()))?;

        tracing::info!(
            user_id = %user_id,
            course_id = %course_id,
            "Enrollment created"
        );

        Ok(enrollment)
    }
}
