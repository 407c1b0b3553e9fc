//! 选课记录仓储

use crate::{
    error::AppError,
    models::course::Course,
    models::enrollment::{EnrolledCourse, Enrollment},
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// LEFT JOIN 查询的扁平行，课程列可能全部为 NULL
#[derive(sqlx::FromRow)]
struct EnrolledCourseRow {
    id: Uuid,
    course_id: Uuid,
    enrolled_at: DateTime<Utc>,
    joined_course_id: Option<Uuid>,
    code: Option<String>,
    title: Option<String>,
    instructor: Option<String>,
    schedule: Option<String>,
    credits: Option<i32>,
    availability: Option<String>,
}

pub struct EnrollmentRepository {
    db: PgPool,
}

impl EnrollmentRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 插入选课记录
    ///
    /// 依赖 (user_id, course_id) 唯一索引：重复选课返回 None。
    /// 不校验 course_id 是否存在于课程表。
    pub async fn insert(
        &self,
        user_id: &Uuid,
        course_id: &Uuid,
    ) -> Result<Option<Enrollment>, AppError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO enrollments (id, user_id, course_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, course_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(enrollment)
    }

    /// 列出某用户的全部选课，附带课程详情
    ///
    /// LEFT JOIN：课程被重建后记录仍然保留，course 字段为 null
    pub async fn list_with_courses(&self, user_id: &Uuid) -> Result<Vec<EnrolledCourse>, AppError> {
        let rows = sqlx::query_as::<_, EnrolledCourseRow>(
            r#"
            SELECT e.id, e.course_id, e.enrolled_at,
                   c.id AS joined_course_id, c.code, c.title, c.instructor,
                   c.schedule, c.credits, c.availability
            FROM enrollments e
            LEFT JOIN courses c ON c.id = e.course_id
            WHERE e.user_id = $1
            ORDER BY e.enrolled_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        let entries = rows
            .into_iter()
            .map(|row| {
                let course = row.joined_course_id.map(|course_id| Course {
                    id: course_id,
                    code: row.code.unwrap_or_default(),
                    title: row.title.unwrap_or_default(),
                    instructor: row.instructor.unwrap_or_default(),
                    schedule: row.schedule.unwrap_or_default(),
                    credits: row.credits.unwrap_or_default(),
                    availability: row.availability.unwrap_or_default(),
                });

                EnrolledCourse {
                    id: row.id,
                    course_id: row.course_id,
                    enrolled_at: row.enrolled_at,
                    course,
                }
            })
            .collect();

        Ok(entries)
    }
}
