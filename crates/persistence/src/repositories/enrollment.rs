//! Enrollment repository: the (student, batch) resolver and student lists.

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::entities::{EnrollmentEntity, EnrollmentStatusDb, EnrollmentSummaryEntity};

/// Enrollment chain context needed to address a notification:
/// the student plus the human-readable batch and course names.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NotificationContext {
    pub student_id: Uuid,
    pub batch_name: String,
    pub course_title: String,
}

/// Repository for enrollment database operations.
#[derive(Clone)]
pub struct EnrollmentRepository {
    pool: PgPool,
}

/// Finds or creates the enrollment for (student, batch) and returns its id.
///
/// An existing row is returned untouched: re-submitting a payment for an
/// already-enrolled batch must not reset status or expiry. The no-op
/// `DO UPDATE` is what makes `RETURNING id` yield the existing row, so two
/// concurrent submissions converge on one enrollment instead of surfacing
/// the unique-constraint violation.
///
/// Runs on any executor so payment submission can call it inside its own
/// transaction.
pub async fn resolve_enrollment<'e>(
    executor: impl PgExecutor<'e>,
    student_id: Uuid,
    batch_id: &str,
    initial_status: EnrollmentStatusDb,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO enrollments (student_id, batch_id, status, joined_at)
        VALUES ($1, $2, $3, CURRENT_DATE)
        ON CONFLICT ON CONSTRAINT enrollments_student_batch_key
        DO UPDATE SET student_id = EXCLUDED.student_id
        RETURNING id
        "#,
    )
    .bind(student_id)
    .bind(batch_id)
    .bind(initial_status)
    .fetch_one(executor)
    .await
}

/// The student's most recently joined enrollment, if any. Fallback target
/// for payments submitted without a batch; runs on any executor so the
/// submission transaction can use it.
pub async fn latest_enrollment<'e>(
    executor: impl PgExecutor<'e>,
    student_id: Uuid,
) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id FROM enrollments
        WHERE student_id = $1
        ORDER BY joined_at DESC
        LIMIT 1
        "#,
    )
    .bind(student_id)
    .fetch_optional(executor)
    .await
}

impl EnrollmentRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find or create an enrollment for (student, batch).
    pub async fn resolve(
        &self,
        student_id: Uuid,
        batch_id: &str,
        initial_status: EnrollmentStatusDb,
    ) -> Result<Uuid, sqlx::Error> {
        resolve_enrollment(&self.pool, student_id, batch_id, initial_status).await
    }

    /// Find enrollment by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<EnrollmentEntity>, sqlx::Error> {
        let entity = sqlx::query_as::<_, EnrollmentEntity>(
            r#"
            SELECT id, student_id, batch_id, status, joined_at, expire_date
            FROM enrollments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity)
    }

    /// List a student's enrollments with batch and course names.
    pub async fn list_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<EnrollmentSummaryEntity>, sqlx::Error> {
        sqlx::query_as::<_, EnrollmentSummaryEntity>(
            r#"
            SELECT e.id, e.batch_id, b.batch_name, c.title AS course_title,
                   e.status, e.joined_at, e.expire_date
            FROM enrollments e
            JOIN batches b ON e.batch_id = b.id
            JOIN courses c ON b.course_id = c.id
            WHERE e.student_id = $1
            ORDER BY e.joined_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Resolve the enrollment -> batch -> course chain for notification
    /// addressing. Returns `None` when the chain is broken.
    pub async fn notification_context(
        &self,
        enrollment_id: Uuid,
    ) -> Result<Option<NotificationContext>, sqlx::Error> {
        sqlx::query_as::<_, NotificationContext>(
            r#"
            SELECT e.student_id, b.batch_name, c.title AS course_title
            FROM enrollments e
            JOIN batches b ON e.batch_id = b.id
            JOIN courses c ON b.course_id = c.id
            WHERE e.id = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await
    }
}
