//! 课程仓储

use crate::{
    error::AppError,
    models::course::{Course, NewCourse},
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct CourseRepository {
    db: PgPool,
}

impl CourseRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出全部课程（按课程代码排序）
    pub async fn list(&self) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY code")
            .fetch_all(&self.db)
            .await?;

        Ok(courses)
    }

    /// 重建课程目录：清空后批量插入
    ///
    /// 在单个事务内执行，失败时回滚，不会留下半空目录
    pub async fn replace_all(&self, courses: &[NewCourse]) -> Result<Vec<Course>, AppError> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM courses").execute(&mut *tx).await?;

        let mut inserted = Vec::with_capacity(courses.len());
        for course in courses {
            let row = sqlx::query_as::<_, Course>(
                r#"
                INSERT INTO courses (id, code, title, instructor, schedule, credits, availability)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&course.code)
            .bind(&course.title)
            .bind(&course.instructor)
            .bind(&course.schedule)
            .bind(course.credits)
            .bind(&course.availability)
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(row);
        }

        tx.commit().await?;

        Ok(inserted)
    }
}
