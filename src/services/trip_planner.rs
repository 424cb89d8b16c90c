// src/services/trip_planner.rs
use chrono::NaiveDate;
use serde_json::Value;

use crate::error::AppError;
use crate::services::geocoder::Geocoder;
use crate::services::metrics_manager::MetricsManager;
use crate::services::openrouter::OpenRouterClient;
use crate::services::prompt;
use crate::trip::{TripPlan, TripRequest};

/// Origin name used when no coordinates were sent or reverse lookup failed.
pub const ORIGIN_PLACEHOLDER: &str = "your location";

/// Calendar facts derived from the requested date range.
#[derive(Debug, Clone)]
pub struct TripDates {
    pub days: i64,
    pub month_name: String,
    pub start_iso: String,
    pub end_iso: String,
}

impl TripDates {
    /// Derive the day count and display fields. Ranges shorter than one full
    /// day are rejected.
    pub fn derive(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        let days = (end - start).num_days();
        if days < 1 {
            return Err(AppError::BadRequest(format!(
                "trip must span at least one full day, got {start} to {end}"
            )));
        }
        Ok(Self {
            days,
            month_name: start.format("%B").to_string(),
            start_iso: start.format("%Y-%m-%d").to_string(),
            end_iso: end.format("%Y-%m-%d").to_string(),
        })
    }
}

/// Field checks that do not need the calendar.
pub fn validate_request(request: &TripRequest) -> Result<(), AppError> {
    if request.destination.trim().is_empty() {
        return Err(AppError::BadRequest(
            "destination must not be empty".to_string(),
        ));
    }
    if let Some(budget) = request.budget {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(AppError::BadRequest(
                "budget must be a positive number".to_string(),
            ));
        }
    }
    Ok(())
}

/// Strip markdown fences and any prose around the outermost JSON object.
///
/// Already-clean input passes through unchanged, so applying this twice gives
/// the same result as applying it once.
pub fn extract_json_object(raw: &str) -> String {
    let without_fences = raw.replace("```json", "").replace("```", "");
    let trimmed = without_fences.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(open), Some(close)) if open < close => trimmed[open..=close].to_string(),
        _ => trimmed.to_string(),
    }
}

/// Reject replies that parsed but are missing the fields every plan must carry.
pub fn validate_plan(plan: &Value) -> Result<(), AppError> {
    let destination_ok = plan
        .get("destination")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty());
    if !destination_ok {
        return Err(AppError::IncompleteReply(
            "reply is missing a destination".to_string(),
        ));
    }
    let transport_ok = plan
        .get("transport")
        .and_then(Value::as_array)
        .is_some_and(|options| !options.is_empty());
    if !transport_ok {
        return Err(AppError::IncompleteReply(
            "reply carries no transport options".to_string(),
        ));
    }
    if !plan.get("accommodation").is_some_and(Value::is_object) {
        return Err(AppError::IncompleteReply(
            "reply is missing accommodation".to_string(),
        ));
    }
    Ok(())
}

/// Orchestrates one trip generation: request validation, date facts, origin
/// lookup, prompt build, a single completion call, then reply cleanup,
/// parsing and validation.
pub struct TripPlanner {
    geocoder: Geocoder,
    generator: OpenRouterClient,
}

impl TripPlanner {
    pub fn new(geocoder: Geocoder, generator: OpenRouterClient) -> Self {
        Self {
            geocoder,
            generator,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(Geocoder::from_env(), OpenRouterClient::from_env()?))
    }

    pub async fn plan_trip(
        &self,
        request: &TripRequest,
        metrics: &MetricsManager,
    ) -> Result<TripPlan, AppError> {
        validate_request(request)?;
        let dates = TripDates::derive(request.start_date, request.end_date)?;

        // Reverse lookup is best effort only. A dead geocoder must never
        // take trip generation down with it.
        let origin = match &request.current_location {
            Some(coords) => match self.geocoder.reverse(coords.lat, coords.lon).await {
                Ok(name) => name,
                Err(err) => {
                    tracing::warn!("reverse geocoding failed, using placeholder: {err}");
                    metrics.record_geocode_fallback().await;
                    ORIGIN_PLACEHOLDER.to_string()
                }
            },
            None => ORIGIN_PLACEHOLDER.to_string(),
        };

        let prompt = prompt::build_prompt(request, &origin, &dates);
        let reply = self.generator.generate(&prompt).await?;

        let cleaned = extract_json_object(&reply);
        let value: Value = serde_json::from_str(&cleaned)
            .map_err(|err| AppError::UnparsableReply(format!("reply is not valid JSON: {err}")))?;
        validate_plan(&value)?;
        let plan: TripPlan = serde_json::from_value(value).map_err(|err| {
            AppError::IncompleteReply(format!("reply does not match the plan shape: {err}"))
        })?;
        Ok(plan)
    }
}
