use travel_genie_backend::error::AppError;
use travel_genie_backend::services::trip_planner::{
    TripDates, extract_json_object, validate_plan, validate_request,
};
use travel_genie_backend::trip::{TravelStyle, Travelers, TripRequest};

use chrono::NaiveDate;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_day_count_is_calendar_difference() {
    let dates = TripDates::derive(date(2024, 3, 1), date(2024, 3, 5)).unwrap();
    assert_eq!(dates.days, 4);
    assert_eq!(dates.month_name, "March");
    assert_eq!(dates.start_iso, "2024-03-01");
    assert_eq!(dates.end_iso, "2024-03-05");
}

#[test]
fn test_zero_day_range_is_rejected() {
    let result = TripDates::derive(date(2024, 3, 1), date(2024, 3, 1));
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[test]
fn test_inverted_range_is_rejected() {
    let result = TripDates::derive(date(2024, 3, 5), date(2024, 3, 1));
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[test]
fn test_fence_stripping_removes_markdown() {
    let fenced = "```json\n{\"destination\": \"Boston\"}\n```";
    assert_eq!(extract_json_object(fenced), "{\"destination\": \"Boston\"}");
}

#[test]
fn test_fence_stripping_is_idempotent() {
    let clean = "{\"destination\": \"Boston\", \"transport\": []}";
    let once = extract_json_object(clean);
    assert_eq!(once, clean);
    assert_eq!(extract_json_object(&once), once);
}

#[test]
fn test_extraction_drops_surrounding_prose() {
    let chatty = "Sure! Here is your plan:\n{\"destination\": \"Boston\"}\nEnjoy the trip!";
    assert_eq!(extract_json_object(chatty), "{\"destination\": \"Boston\"}");
}

#[test]
fn test_plan_validation_accepts_complete_plan() {
    let plan = json!({
        "destination": "Boston",
        "transport": [{"type": "Bus", "name": "Megabus", "cost": "$65", "duration": "9 hours"}],
        "accommodation": {"name": "HI Boston", "cost": "$45/night", "total": "$90 for 2 nights"}
    });
    assert!(validate_plan(&plan).is_ok());
}

#[test]
fn test_plan_validation_rejects_missing_accommodation() {
    let plan = json!({
        "destination": "Boston",
        "transport": [{"type": "Bus", "name": "Megabus", "cost": "$65", "duration": "9 hours"}]
    });
    assert!(matches!(
        validate_plan(&plan),
        Err(AppError::IncompleteReply(_))
    ));
}

#[test]
fn test_plan_validation_rejects_empty_transport() {
    let plan = json!({
        "destination": "Boston",
        "transport": [],
        "accommodation": {"name": "HI Boston", "cost": "$45/night", "total": "$90"}
    });
    assert!(matches!(
        validate_plan(&plan),
        Err(AppError::IncompleteReply(_))
    ));
}

#[test]
fn test_plan_validation_rejects_blank_destination() {
    let plan = json!({
        "destination": "",
        "transport": [{"type": "Bus", "name": "Megabus", "cost": "$65", "duration": "9 hours"}],
        "accommodation": {"name": "HI Boston", "cost": "$45/night", "total": "$90"}
    });
    assert!(matches!(
        validate_plan(&plan),
        Err(AppError::IncompleteReply(_))
    ));
}

#[test]
fn test_request_validation_rejects_blank_destination() {
    let request = TripRequest {
        destination: "  ".to_string(),
        start_date: date(2025, 6, 1),
        end_date: date(2025, 6, 4),
        budget: None,
        travelers: Travelers::Pair,
        travel_style: TravelStyle::Budget,
        current_location: None,
    };
    assert!(matches!(
        validate_request(&request),
        Err(AppError::BadRequest(_))
    ));
}

#[test]
fn test_request_validation_rejects_non_positive_budget() {
    let mut request = TripRequest {
        destination: "Boston".to_string(),
        start_date: date(2025, 6, 1),
        end_date: date(2025, 6, 4),
        budget: Some(0.0),
        travelers: Travelers::Pair,
        travel_style: TravelStyle::Budget,
        current_location: None,
    };
    assert!(validate_request(&request).is_err());

    request.budget = Some(350.0);
    assert!(validate_request(&request).is_ok());
}

#[test]
fn test_traveler_buckets_decode_from_wire_values() {
    let body = r#"{"destination": "Boston", "startDate": "2025-06-01", "endDate": "2025-06-04", "travelers": "3-4", "travelStyle": "comfort"}"#;
    let request: TripRequest = serde_json::from_str(body).unwrap();
    assert_eq!(request.travelers, Travelers::SmallGroup);
    assert_eq!(request.travel_style, TravelStyle::Comfort);
    assert_eq!(request.travelers.to_string(), "3-4");

    let out_of_range = r#"{"destination": "Boston", "startDate": "2025-06-01", "endDate": "2025-06-04", "travelers": "10", "travelStyle": "budget"}"#;
    assert!(serde_json::from_str::<TripRequest>(out_of_range).is_err());

    let unknown_style = r#"{"destination": "Boston", "startDate": "2025-06-01", "endDate": "2025-06-04", "travelers": "2", "travelStyle": "luxury"}"#;
    assert!(serde_json::from_str::<TripRequest>(unknown_style).is_err());
}
