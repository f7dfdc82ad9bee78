use chrono::{Days, NaiveDate};

use crate::models::{DayPlan, ItinerarySkeleton, PlaceInfo};

pub const SKELETON_TITLE: &str = "여행 일정 뼈대";

const BASE_FEES_KRW: [u32; 3] = [0, 12_000, 18_000];

/// Builds a placeholder plan with one entry per day, dated from `start` when given.
pub fn build_itinerary(days: i32, start: Option<NaiveDate>) -> ItinerarySkeleton {
    let count = u32::try_from(days).unwrap_or(0);
    let plans = (1..=count)
        .map(|day| DayPlan {
            day,
            date: start.and_then(|start| start.checked_add_days(Days::new(u64::from(day - 1)))),
            places: placeholder_places(day),
        })
        .collect();

    ItinerarySkeleton {
        title: SKELETON_TITLE.to_string(),
        days,
        plans,
    }
}

fn placeholder_places(day: u32) -> Vec<PlaceInfo> {
    let fee_krw = BASE_FEES_KRW[day as usize % BASE_FEES_KRW.len()];
    vec![
        PlaceInfo {
            name: format!("샘플 장소 {day}-1"),
            category: "명소".into(),
            open_time: "09:00".into(),
            close_time: "18:00".into(),
            fee_krw,
        },
        PlaceInfo {
            name: format!("샘플 장소 {day}-2"),
            category: "맛집".into(),
            open_time: "11:00".into(),
            close_time: "22:00".into(),
            fee_krw: 0,
        },
    ]
}
