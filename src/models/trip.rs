use serde::{Deserialize, Serialize};

use super::itinerary::ItinerarySkeleton;

/// A stored itinerary and the identifier it was filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub itinerary: ItinerarySkeleton,
}

/// Request body for creating or replacing a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPayload {
    pub itinerary: ItinerarySkeleton,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}
