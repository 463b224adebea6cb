use thiserror::Error;

/// Failures a caller can act on. Anything infrastructural (pool exhaustion,
/// SQL errors) stays an `anyhow::Error` with context added at the call site.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),
    #[error("この時間枠は既に予約されています。")]
    SlotUnavailable,
    #[error("Reservation not found")]
    ReservationNotFound,
}
