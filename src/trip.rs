// src/trip.rs
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trip parameters submitted by the client form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Option<f64>,
    pub travelers: Travelers,
    pub travel_style: TravelStyle,
    pub current_location: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Traveler count as the form submits it. Anything outside this set is a
/// deserialization error, so bad values never reach the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Travelers {
    #[serde(rename = "1")]
    Solo,
    #[serde(rename = "2")]
    Pair,
    #[serde(rename = "3-4")]
    SmallGroup,
    #[serde(rename = "5+")]
    LargeGroup,
}

impl Travelers {
    pub fn as_str(&self) -> &'static str {
        match self {
            Travelers::Solo => "1",
            Travelers::Pair => "2",
            Travelers::SmallGroup => "3-4",
            Travelers::LargeGroup => "5+",
        }
    }
}

impl fmt::Display for Travelers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Budget,
    Balanced,
    Comfort,
}

impl TravelStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Budget => "budget",
            TravelStyle::Balanced => "balanced",
            TravelStyle::Comfort => "comfort",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured itinerary returned to the client.
///
/// `destination`, `transport` and `accommodation` are the required core; a
/// generation reply missing any of them is rejected as incomplete. The
/// remaining display fields default to empty so minor model omissions do not
/// fail an otherwise usable plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub destination: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub total_cost: String,
    #[serde(default)]
    pub daily_budget: String,
    pub transport: Vec<TransportOption>,
    pub accommodation: Accommodation,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default)]
    pub packing_list: Vec<String>,
    #[serde(default)]
    pub safety_tips: Vec<String>,
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    #[serde(rename = "type")]
    pub kind: TransportKind,
    pub name: String,
    pub cost: String,
    pub duration: String,
    #[serde(default)]
    pub analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_instructions: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportKind {
    Bus,
    Train,
    Flight,
    Metro,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Bus => "Bus",
            TransportKind::Train => "Train",
            TransportKind::Flight => "Flight",
            TransportKind::Metro => "Metro",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub name: String,
    pub cost: String,
    pub total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub activities: String,
}

/// Reply of the PDF report endpoint: where the rendered file is served from.
#[derive(Debug, Serialize, Deserialize)]
pub struct TripReportResponse {
    pub url: String,
}
