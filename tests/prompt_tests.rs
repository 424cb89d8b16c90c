use travel_genie_backend::services::prompt::build_prompt;
use travel_genie_backend::services::trip_planner::TripDates;
use travel_genie_backend::trip::{TravelStyle, Travelers, TripRequest};

use chrono::NaiveDate;

fn boston_request() -> TripRequest {
    TripRequest {
        destination: "Boston".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
        budget: None,
        travelers: Travelers::Pair,
        travel_style: TravelStyle::Budget,
        current_location: None,
    }
}

#[test]
fn test_prompt_embeds_trip_details() {
    let request = boston_request();
    let dates = TripDates::derive(request.start_date, request.end_date).unwrap();
    let prompt = build_prompt(&request, "your location", &dates);

    assert!(prompt.contains("- Origin: your location"));
    assert!(prompt.contains("- Destination: Boston"));
    assert!(prompt.contains("2025-06-01 to 2025-06-04 (3 days in June)"));
    assert!(prompt.contains("- Number of travelers: 2"));
    assert!(prompt.contains("- Travel style: budget"));
    assert!(prompt.contains("$XXX for 2 nights"));
}

#[test]
fn test_prompt_defaults_budget_when_absent() {
    let request = boston_request();
    let dates = TripDates::derive(request.start_date, request.end_date).unwrap();
    let prompt = build_prompt(&request, "College Park", &dates);
    assert!(prompt.contains("Budget-conscious (assume $300-500 range)"));

    let mut with_budget = boston_request();
    with_budget.budget = Some(400.0);
    let prompt = build_prompt(&with_budget, "College Park", &dates);
    assert!(prompt.contains("- Budget: 400"));
    assert!(!prompt.contains("$300-500 range"));
}

#[test]
fn test_prompt_carries_domain_heuristics() {
    let request = boston_request();
    let dates = TripDates::derive(request.start_date, request.end_date).unwrap();
    let prompt = build_prompt(&request, "your location", &dates);

    assert!(prompt.contains("EXACT structure"));
    assert!(prompt.contains("EXAMPLE TRANSPORT PRICING BY DISTANCE"));
    assert!(prompt.contains("EXAMPLES OF GOOD ROUTE RESEARCH"));
    assert!(prompt.contains("Return ONLY valid JSON"));
    assert!(prompt.contains("Create 3 unique daily itineraries"));
}

#[test]
fn test_prompt_is_a_pure_function_of_inputs() {
    let request = boston_request();
    let dates = TripDates::derive(request.start_date, request.end_date).unwrap();
    let first = build_prompt(&request, "your location", &dates);
    let second = build_prompt(&request, "your location", &dates);
    assert_eq!(first, second);
}
