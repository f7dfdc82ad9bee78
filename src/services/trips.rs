use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{ItinerarySkeleton, Trip},
};

/// In-memory trip table shared by every request handler.
///
/// Listing returns trips in the order they were created; replacing an
/// itinerary keeps its slot.
#[derive(Clone, Default)]
pub struct TripStore {
    inner: Arc<RwLock<TripTable>>,
}

#[derive(Default)]
struct TripTable {
    entries: HashMap<String, ItinerarySkeleton>,
    order: Vec<String>,
}

impl TripStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, itinerary: ItinerarySkeleton) -> Trip {
        let id = new_trip_id();
        let mut table = self.inner.write().await;
        table.entries.insert(id.clone(), itinerary.clone());
        table.order.push(id.clone());
        info!(trip_id = %id, days = itinerary.days, "trip created");
        Trip { id, itinerary }
    }

    pub async fn list(&self) -> Vec<Trip> {
        let table = self.inner.read().await;
        table
            .order
            .iter()
            .filter_map(|id| {
                table.entries.get(id).map(|itinerary| Trip {
                    id: id.clone(),
                    itinerary: itinerary.clone(),
                })
            })
            .collect()
    }

    pub async fn get(&self, id: &str) -> Result<Trip, AppError> {
        let table = self.inner.read().await;
        let itinerary = table.entries.get(id).ok_or(AppError::NotFound)?;
        debug!(trip_id = %id, "trip loaded");
        Ok(Trip {
            id: id.to_string(),
            itinerary: itinerary.clone(),
        })
    }

    pub async fn update(&self, id: &str, itinerary: ItinerarySkeleton) -> Result<Trip, AppError> {
        let mut table = self.inner.write().await;
        let slot = table.entries.get_mut(id).ok_or(AppError::NotFound)?;
        *slot = itinerary.clone();
        info!(trip_id = %id, days = itinerary.days, "trip updated");
        Ok(Trip {
            id: id.to_string(),
            itinerary,
        })
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut table = self.inner.write().await;
        table.entries.remove(id).ok_or(AppError::NotFound)?;
        table.order.retain(|existing| existing != id);
        info!(trip_id = %id, "trip deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn new_trip_id() -> String {
    Uuid::new_v4().simple().to_string()
}
