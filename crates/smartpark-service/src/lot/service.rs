//! Parking lot registration and queries.

use std::sync::Arc;

use tracing::info;

use smartpark_core::error::AppError;
use smartpark_core::result::AppResult;
use smartpark_core::traits::clock::Clock;
use smartpark_core::traits::store::TransactionalStore;
use smartpark_core::types::key::LOTS;
use smartpark_core::types::{Document, LotId, StoreKey};
use smartpark_entity::lot::{CreateParkingLot, ParkingLot};

use crate::context::RequestContext;

/// Registers lots and serves committed occupancy reads.
#[derive(Clone)]
pub struct LotService {
    /// Transactional store seam.
    store: Arc<dyn TransactionalStore>,
    /// Timestamp source.
    clock: Arc<dyn Clock>,
}

impl LotService {
    /// Creates a new lot service.
    pub fn new(store: Arc<dyn TransactionalStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Registers a new lot with an empty occupancy.
    ///
    /// `max_capacity` must be positive and is immutable afterwards.
    pub async fn create_lot(
        &self,
        ctx: &RequestContext,
        data: CreateParkingLot,
    ) -> AppResult<ParkingLot> {
        if data.max_capacity == 0 {
            return Err(AppError::validation("max_capacity must be positive"));
        }

        let lot = ParkingLot {
            id: LotId::new(),
            name: data.name,
            max_capacity: data.max_capacity,
            current_occupancy: 0,
            created_at: self.clock.now(),
        };

        let mut tx = self.store.begin().await?;
        tx.put(StoreKey::lot(&lot.id), Document::encode(&lot)?);
        tx.commit().await?;

        info!(
            user_id = %ctx.user_id,
            lot_id = %lot.id,
            name = %lot.name,
            capacity = lot.max_capacity,
            "Parking lot registered"
        );
        Ok(lot)
    }

    /// Reads the committed state of a lot.
    pub async fn get_lot(&self, lot_id: LotId) -> AppResult<ParkingLot> {
        let document = self
            .store
            .get(&StoreKey::lot(&lot_id))
            .await?
            .ok_or_else(|| AppError::not_found(format!("Parking lot {lot_id} not found")))?;
        document.decode()
    }

    /// Lists all registered lots.
    pub async fn list_lots(&self) -> AppResult<Vec<ParkingLot>> {
        let documents = self.store.scan(LOTS).await?;
        let mut lots = Vec::with_capacity(documents.len());
        for document in &documents {
            lots.push(document.decode()?);
        }
        Ok(lots)
    }
}
