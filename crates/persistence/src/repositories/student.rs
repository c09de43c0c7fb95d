//! Student repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::StudentEntity;

/// Repository for student database operations.
#[derive(Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new student. The phone uniqueness constraint surfaces as
    /// a database error the caller maps to a validation failure.
    pub async fn create(
        &self,
        name: &str,
        phone_primary: &str,
        password_hash: &str,
        date_of_birth: Option<chrono::NaiveDate>,
        address: Option<&str>,
    ) -> Result<StudentEntity, sqlx::Error> {
        sqlx::query_as::<_, StudentEntity>(
            r#"
            INSERT INTO students (name, phone_primary, password_hash, date_of_birth, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, phone_primary, phone_secondary, password_hash, date_of_birth, address, profile_image_url, created_at
            "#,
        )
        .bind(name)
        .bind(phone_primary)
        .bind(password_hash)
        .bind(date_of_birth)
        .bind(address)
        .fetch_one(&self.pool)
        .await
    }

    /// Find student by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<StudentEntity>, sqlx::Error> {
        sqlx::query_as::<_, StudentEntity>(
            r#"
            SELECT id, name, phone_primary, phone_secondary, password_hash, date_of_birth, address, profile_image_url, created_at
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find student by primary phone (the login identifier).
    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<StudentEntity>, sqlx::Error> {
        sqlx::query_as::<_, StudentEntity>(
            r#"
            SELECT id, name, phone_primary, phone_secondary, password_hash, date_of_birth, address, profile_image_url, created_at
            FROM students
            WHERE phone_primary = $1
            "#,
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
    }

    /// List all students, newest first.
    pub async fn list(&self) -> Result<Vec<StudentEntity>, sqlx::Error> {
        sqlx::query_as::<_, StudentEntity>(
            r#"
            SELECT id, name, phone_primary, phone_secondary, password_hash, date_of_birth, address, profile_image_url, created_at
            FROM students
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Admin update of contact details.
    pub async fn update_contact(
        &self,
        id: Uuid,
        name: &str,
        phone_primary: &str,
        phone_secondary: Option<&str>,
        address: Option<&str>,
    ) -> Result<Option<StudentEntity>, sqlx::Error> {
        sqlx::query_as::<_, StudentEntity>(
            r#"
            UPDATE students
            SET name = $2, phone_primary = $3, phone_secondary = $4, address = $5
            WHERE id = $1
            RETURNING id, name, phone_primary, phone_secondary, password_hash, date_of_birth, address, profile_image_url, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(phone_primary)
        .bind(phone_secondary)
        .bind(address)
        .fetch_optional(&self.pool)
        .await
    }

    /// Student self-service profile update. Pass the current values for
    /// fields that are not changing.
    pub async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        address: Option<&str>,
        profile_image_url: Option<&str>,
        password_hash: &str,
    ) -> Result<Option<StudentEntity>, sqlx::Error> {
        sqlx::query_as::<_, StudentEntity>(
            r#"
            UPDATE students
            SET name = $2, address = $3, profile_image_url = $4, password_hash = $5
            WHERE id = $1
            RETURNING id, name, phone_primary, phone_secondary, password_hash, date_of_birth, address, profile_image_url, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(address)
        .bind(profile_image_url)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a student and all dependent rows. Enrollments, payments,
    /// exam results and notifications go with the student via the schema's
    /// cascade rules, inside the single implicit transaction of the delete.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Total number of students, for the admin dashboard.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await
    }
}
