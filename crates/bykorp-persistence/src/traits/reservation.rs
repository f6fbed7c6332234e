//! Reservation persistence trait
//!
//! Reservations are contact-form submissions. They are written by the public
//! site and read back only by administrators.

use async_trait::async_trait;

use bykorp_common::{NewReservation, RecordId, Reservation};

/// Reservation operations
#[async_trait]
pub trait ReservationPersistence: Send + Sync {
    /// Store a validated reservation with status `pending`
    async fn reservation_create(&self, reservation: &NewReservation) -> anyhow::Result<RecordId>;

    /// Find all reservations, newest first
    async fn reservation_find_all(&self) -> anyhow::Result<Vec<Reservation>>;
}
