//! Admin dashboard statistics.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use persistence::repositories::{PaymentRepository, StudentRepository};

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_students: i64,
    /// Sum of verified payment amounts, in whole kyat.
    pub total_income: i64,
}

/// GET /api/v1/admin/stats (admin)
pub async fn dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    let student_repo = StudentRepository::new(state.pool.clone());
    let payment_repo = PaymentRepository::new(state.pool.clone());

    let total_students = student_repo.count().await?;
    let total_income = payment_repo.verified_income().await?;

    Ok(Json(DashboardStats {
        total_students,
        total_income,
    }))
}
