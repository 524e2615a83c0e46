use crate::model::booking::Booking;
use async_trait::async_trait;
use shared::error::AppResult;

// Notification is a separately-failable side effect: callers log a failure
// and move on, they never fail the booking over it.
#[async_trait]
pub trait BookingNotifier: Send + Sync {
    async fn booking_requested(&self, booking: &Booking) -> AppResult<()>;
}
