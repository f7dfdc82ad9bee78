use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{itinerary::ItinerarySkeleton, source_url::HttpUrl};

pub const DEFAULT_TRIP_DAYS: i32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeUrlRequest {
    pub url: HttpUrl,
    pub start_date: Option<NaiveDate>,
    #[serde(default = "default_days")]
    pub days: i32,
}

fn default_days() -> i32 {
    DEFAULT_TRIP_DAYS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeUrlResponse {
    pub source_url: HttpUrl,
    pub summary: String,
    pub itinerary: ItinerarySkeleton,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRouteRequest {
    pub places: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeRouteResponse {
    pub ordered_places: Vec<String>,
    pub note: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}
