use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceInfo {
    pub name: String,
    pub category: String,
    /// Opening time as `HH:MM`.
    pub open_time: String,
    /// Closing time as `HH:MM`.
    pub close_time: String,
    pub fee_krw: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based position inside [`ItinerarySkeleton::plans`].
    pub day: u32,
    pub date: Option<NaiveDate>,
    pub places: Vec<PlaceInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItinerarySkeleton {
    pub title: String,
    /// Requested day count. Non-positive values come with an empty `plans`.
    pub days: i32,
    pub plans: Vec<DayPlan>,
}

impl ItinerarySkeleton {
    pub fn place_count(&self) -> usize {
        self.plans.iter().map(|plan| plan.places.len()).sum()
    }
}
