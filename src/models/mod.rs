pub mod itinerary;
pub mod planning;
pub mod source_url;
pub mod trip;

pub use itinerary::{DayPlan, ItinerarySkeleton, PlaceInfo};
pub use source_url::HttpUrl;
pub use trip::{DeletedResponse, Trip, TripPayload};
