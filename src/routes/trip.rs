use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    services::{metrics_manager::MetricsData, report_generator::generate_pdf_report},
    state::SharedState,
    trip::{TripPlan, TripReportResponse, TripRequest},
};

pub async fn generate_trip_handler(
    State(state): State<SharedState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<TripPlan>, AppError> {
    // Malformed bodies get the same error shape as every other failure.
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let err = AppError::BadRequest(rejection.body_text());
            state.metrics.record_failure(err.class()).await;
            return Err(err);
        }
    };

    tracing::info!(destination = %request.destination, "generating trip plan");

    match state.planner.plan_trip(&request, &state.metrics).await {
        Ok(plan) => {
            state.metrics.record_plan().await;
            Ok(Json(plan))
        }
        Err(err) => {
            tracing::error!("trip generation failed: {err}");
            state.metrics.record_failure(err.class()).await;
            Err(err)
        }
    }
}

pub async fn trip_report_handler(
    payload: Result<Json<TripPlan>, JsonRejection>,
) -> Result<Json<TripReportResponse>, AppError> {
    let Json(plan) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let url = generate_pdf_report(&plan)
        .await
        .map_err(|err| AppError::Internal(format!("failed to render report: {err}")))?;
    Ok(Json(TripReportResponse { url }))
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
