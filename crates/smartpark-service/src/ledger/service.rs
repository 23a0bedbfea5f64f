//! Occupancy counting inside caller-supplied transactions.

use tracing::debug;

use smartpark_core::error::AppError;
use smartpark_core::result::AppResult;
use smartpark_core::traits::store::StoreTransaction;
use smartpark_core::types::{Document, LotId, StoreKey};
use smartpark_entity::lot::ParkingLot;

/// Owns each lot's occupancy count and enforces the ceiling invariant.
///
/// Both operations only stage writes into the caller's transaction; the
/// ceiling is re-validated at commit time by the store's optimistic
/// concurrency control, so two racing check-ins can never both claim the
/// last slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccupancyLedger;

impl OccupancyLedger {
    /// Creates the ledger.
    pub fn new() -> Self {
        Self
    }

    /// Stages `current_occupancy += 1` for the lot.
    ///
    /// Fails with `NotFound` if the lot does not exist and with
    /// `CapacityExceeded` if the lot is at its ceiling. No effect
    /// outside the transaction.
    pub async fn try_increment(
        &self,
        tx: &mut dyn StoreTransaction,
        lot_id: LotId,
    ) -> AppResult<ParkingLot> {
        let key = StoreKey::lot(&lot_id);
        let document = tx
            .get(&key)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Parking lot {lot_id} not found")))?;
        let mut lot: ParkingLot = document.decode()?;

        if lot.is_full() {
            debug!(lot_id = %lot_id, capacity = lot.max_capacity, "Lot is at capacity");
            return Err(AppError::capacity_exceeded(format!(
                "Parking lot {lot_id} is full ({} / {})",
                lot.current_occupancy, lot.max_capacity
            )));
        }

        lot.current_occupancy += 1;
        tx.put(key, Document::encode(&lot)?);
        Ok(lot)
    }

    /// Stages `current_occupancy -= 1` for the lot.
    ///
    /// The caller guarantees a matching prior increment is being offset;
    /// the paired session's active status proves the increment happened.
    /// A zero count here means the pairing invariant was broken, which
    /// is reported as `Internal` rather than silently wrapped.
    pub async fn decrement(
        &self,
        tx: &mut dyn StoreTransaction,
        lot_id: LotId,
    ) -> AppResult<ParkingLot> {
        let key = StoreKey::lot(&lot_id);
        let document = tx
            .get(&key)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Parking lot {lot_id} not found")))?;
        let mut lot: ParkingLot = document.decode()?;

        if lot.current_occupancy == 0 {
            return Err(AppError::internal(format!(
                "Occupancy of lot {lot_id} is zero but a decrement was requested"
            )));
        }

        lot.current_occupancy -= 1;
        tx.put(key, Document::encode(&lot)?);
        Ok(lot)
    }
}
