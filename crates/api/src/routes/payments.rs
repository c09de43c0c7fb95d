//! Payment endpoints: submission, adjudication and the admin queue.
//!
//! Adjudication is the one place in the backend where partial failure
//! matters: the payment status change and the enrollment cascade commit in
//! a single transaction, and the student notification is emitted after the
//! commit with failures logged rather than unwound.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{
    AdjudicatePaymentRequest, AdminPaymentRow, NotificationTemplate, Payment, PaymentDecision,
    PaymentStatus, SubmitPaymentRequest,
};
use persistence::repositories::{
    AdjudicationOutcome, EnrollmentRepository, NotificationRepository, PaymentRepository,
    StudentRepository,
};

/// Submit a payment for admin review.
///
/// POST /api/v1/payments
///
/// With a `batch_id` the student is auto-enrolled (status pending) when no
/// enrollment exists yet; without one the payment attaches to the most
/// recently joined enrollment.
pub async fn submit_payment(
    State(state): State<AppState>,
    Json(request): Json<SubmitPaymentRequest>,
) -> Result<Json<Payment>, ApiError> {
    request.validate()?;

    let receipt = request
        .receipt()
        .ok_or_else(|| ApiError::Validation("Receipt reference is required".to_string()))?;

    let student_repo = StudentRepository::new(state.pool.clone());
    let payment_repo = PaymentRepository::new(state.pool.clone());

    student_repo
        .find_by_id(request.student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let payment = payment_repo
        .submit(
            request.student_id,
            request.batch_id.as_deref(),
            request.amount,
            &request.payment_method,
            request.transaction_ref.as_deref(),
            receipt,
        )
        .await?
        .ok_or_else(|| {
            ApiError::Validation("No enrollment found. Please select a course.".to_string())
        })?;

    info!(
        payment_id = %payment.id,
        student_id = %request.student_id,
        amount = request.amount,
        "Payment submitted for review"
    );

    Ok(Json(payment.into()))
}

/// Adjudicate a pending payment.
///
/// PUT /api/v1/payments/:id (admin)
///
/// Body: `{"status": "verified"}` or `{"status": "rejected"}`. A payment
/// already in a terminal state is a conflict; re-adjudication is not
/// supported.
pub async fn adjudicate_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
    Json(request): Json<AdjudicatePaymentRequest>,
) -> Result<Json<Payment>, ApiError> {
    let decision = PaymentDecision::parse(&request.status).ok_or_else(|| {
        ApiError::Validation(format!(
            "Invalid status '{}': expected 'verified' or 'rejected'",
            request.status
        ))
    })?;

    let payment_repo = PaymentRepository::new(state.pool.clone());

    let (payment, enrollment_id) = match payment_repo.adjudicate(payment_id, decision).await? {
        AdjudicationOutcome::Applied {
            payment,
            enrollment_id,
        } => (payment, enrollment_id),
        AdjudicationOutcome::NotFound => {
            return Err(ApiError::NotFound("Payment not found".to_string()));
        }
        AdjudicationOutcome::AlreadyTerminal(status) => {
            return Err(ApiError::Conflict(format!(
                "Payment is already {}",
                PaymentStatus::from(status).as_str()
            )));
        }
    };

    info!(
        payment_id = %payment_id,
        decision = ?decision,
        enrollment_id = %enrollment_id,
        "Payment adjudicated"
    );

    // Notification emission is non-fatal by policy: the payment/enrollment
    // pair has already committed, and a failed or unresolvable notification
    // must not undo it.
    emit_adjudication_notification(&state, enrollment_id, decision).await;

    Ok(Json(payment.into()))
}

async fn emit_adjudication_notification(
    state: &AppState,
    enrollment_id: Uuid,
    decision: PaymentDecision,
) {
    let enrollment_repo = EnrollmentRepository::new(state.pool.clone());
    let notification_repo = NotificationRepository::new(state.pool.clone());

    let context = match enrollment_repo.notification_context(enrollment_id).await {
        Ok(Some(context)) => context,
        Ok(None) => {
            info!(
                enrollment_id = %enrollment_id,
                "Enrollment chain unresolvable, skipping notification"
            );
            return;
        }
        Err(err) => {
            warn!(
                enrollment_id = %enrollment_id,
                error = %err,
                "Failed to resolve notification context"
            );
            return;
        }
    };

    let template = decision.notification_template();
    let params = NotificationTemplate::payment_params(&context.course_title, &context.batch_name);

    if let Err(err) = notification_repo
        .create(
            context.student_id,
            template.key(),
            &params,
            decision.notification_kind().into(),
        )
        .await
    {
        warn!(
            enrollment_id = %enrollment_id,
            student_id = %context.student_id,
            error = %err,
            "Failed to emit adjudication notification"
        );
    }
}

/// Admin review queue: all payments with names, pending first.
///
/// GET /api/v1/payments (admin)
pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminPaymentRow>>, ApiError> {
    let repo = PaymentRepository::new(state.pool.clone());
    let rows = repo.list_admin().await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
