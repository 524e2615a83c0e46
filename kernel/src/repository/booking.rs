use crate::model::{
    booking::{
        event::{BookingListFilter, CreateBooking, UpdateBookingDetails, UpdateBookingStatus},
        Booking,
    },
    id::BookingId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // Re-checks hostel availability inside the transaction before inserting
    // the pending booking.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    async fn find_all(&self, filter: BookingListFilter) -> AppResult<Vec<Booking>>;
    // Guarded on the expected current status; a concurrent transition makes
    // this fail rather than overwrite.
    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()>;
    async fn update_details(&self, event: UpdateBookingDetails) -> AppResult<()>;
}
