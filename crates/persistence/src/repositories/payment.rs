//! Payment repository: submission and adjudication transactions plus the
//! admin and student listings.

use chrono::{Duration, Utc};
use domain::models::PaymentDecision;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{
    AdminPaymentRowEntity, EnrollmentStatusDb, PaymentEntity, PaymentStatusDb,
    StudentPaymentRowEntity,
};
use crate::repositories::enrollment::{latest_enrollment, resolve_enrollment};

/// Result of an adjudication attempt.
#[derive(Debug)]
pub enum AdjudicationOutcome {
    /// The payment moved from pending to the decided terminal status and
    /// the linked enrollment was cascaded in the same transaction.
    Applied {
        payment: PaymentEntity,
        enrollment_id: Uuid,
    },
    /// No payment row with this id exists.
    NotFound,
    /// The payment is already in a terminal state; nothing was changed.
    AlreadyTerminal(PaymentStatusDb),
}

/// Repository for payment database operations.
#[derive(Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a pending payment, resolving (or creating) the enrollment in
    /// the same transaction so the pair commits together.
    ///
    /// With a batch id the enrollment is upserted with status `pending`;
    /// without one the student's most recent enrollment is used. Returns
    /// `None` when no enrollment is resolvable (the caller decides the
    /// error shape).
    pub async fn submit(
        &self,
        student_id: Uuid,
        batch_id: Option<&str>,
        amount: i64,
        payment_method: &str,
        transaction_ref: Option<&str>,
        receipt_url: &str,
    ) -> Result<Option<PaymentEntity>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let enrollment_id = match batch_id {
            Some(batch_id) => {
                resolve_enrollment(&mut *tx, student_id, batch_id, EnrollmentStatusDb::Pending)
                    .await?
            }
            None => match latest_enrollment(&mut *tx, student_id).await? {
                Some(id) => id,
                None => return Ok(None),
            },
        };

        let payment = sqlx::query_as::<_, PaymentEntity>(
            r#"
            INSERT INTO payments (enrollment_id, amount, payment_method, transaction_ref, receipt_url, status, payment_date)
            VALUES ($1, $2, $3, $4, $5, 'pending', NOW())
            RETURNING id, enrollment_id, amount, payment_method, transaction_ref, receipt_url, status, payment_date
            "#,
        )
        .bind(enrollment_id)
        .bind(amount)
        .bind(payment_method)
        .bind(transaction_ref)
        .bind(receipt_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(payment))
    }

    /// Apply an admin decision to a pending payment.
    ///
    /// The payment update and the enrollment cascade run in one transaction:
    /// a payment is never left verified or rejected without its enrollment
    /// side effect. The status guard makes terminal states final; a second
    /// adjudication reports [`AdjudicationOutcome::AlreadyTerminal`].
    ///
    /// Notification emission is intentionally not part of this transaction
    /// (callers emit after commit and treat failure as non-fatal).
    pub async fn adjudicate(
        &self,
        payment_id: Uuid,
        decision: PaymentDecision,
    ) -> Result<AdjudicationOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let payment = sqlx::query_as::<_, PaymentEntity>(
            r#"
            UPDATE payments
            SET status = $2
            WHERE id = $1 AND status = 'pending'
            RETURNING id, enrollment_id, amount, payment_method, transaction_ref, receipt_url, status, payment_date
            "#,
        )
        .bind(payment_id)
        .bind(PaymentStatusDb::from(decision.payment_status()))
        .fetch_optional(&mut *tx)
        .await?;

        let payment = match payment {
            Some(payment) => payment,
            None => {
                // Distinguish a missing payment from a re-adjudication.
                let current = sqlx::query_scalar::<_, PaymentStatusDb>(
                    "SELECT status FROM payments WHERE id = $1",
                )
                .bind(payment_id)
                .fetch_optional(&mut *tx)
                .await?;

                return Ok(match current {
                    Some(status) => AdjudicationOutcome::AlreadyTerminal(status),
                    None => AdjudicationOutcome::NotFound,
                });
            }
        };

        let expire_date = Utc::now() + Duration::days(decision.expiry_shift_days());

        sqlx::query(
            r#"
            UPDATE enrollments
            SET status = $2, expire_date = $3
            WHERE id = $1
            "#,
        )
        .bind(payment.enrollment_id)
        .bind(EnrollmentStatusDb::from(decision.enrollment_status()))
        .bind(expire_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let enrollment_id = payment.enrollment_id;
        Ok(AdjudicationOutcome::Applied {
            payment,
            enrollment_id,
        })
    }

    /// Find payment by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PaymentEntity>, sqlx::Error> {
        sqlx::query_as::<_, PaymentEntity>(
            r#"
            SELECT id, enrollment_id, amount, payment_method, transaction_ref, receipt_url, status, payment_date
            FROM payments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Admin review queue: all payments with student/batch/course names,
    /// pending first, newest within each group.
    pub async fn list_admin(&self) -> Result<Vec<AdminPaymentRowEntity>, sqlx::Error> {
        sqlx::query_as::<_, AdminPaymentRowEntity>(
            r#"
            SELECT p.id, s.name AS student_name, s.phone_primary,
                   c.title AS course_title, b.batch_name,
                   p.amount, p.payment_method, p.transaction_ref, p.receipt_url,
                   p.status, p.payment_date
            FROM payments p
            JOIN enrollments e ON p.enrollment_id = e.id
            JOIN students s ON e.student_id = s.id
            JOIN batches b ON e.batch_id = b.id
            JOIN courses c ON b.course_id = c.id
            ORDER BY CASE WHEN p.status = 'pending' THEN 0 ELSE 1 END, p.payment_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// A student's payment history with enrollment context.
    pub async fn list_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<StudentPaymentRowEntity>, sqlx::Error> {
        sqlx::query_as::<_, StudentPaymentRowEntity>(
            r#"
            SELECT p.id, c.title AS course_title, b.id AS batch_id, b.batch_name,
                   p.amount, p.payment_method, p.transaction_ref, p.receipt_url,
                   p.status, p.payment_date,
                   e.status AS enrollment_status, e.expire_date
            FROM payments p
            JOIN enrollments e ON p.enrollment_id = e.id
            JOIN batches b ON e.batch_id = b.id
            JOIN courses c ON b.course_id = c.id
            WHERE e.student_id = $1
            ORDER BY p.payment_date DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Total verified income, for the admin dashboard.
    pub async fn verified_income(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(amount), 0) FROM payments WHERE status = 'verified'",
        )
        .fetch_one(&self.pool)
        .await
    }
}
