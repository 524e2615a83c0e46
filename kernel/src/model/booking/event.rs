use super::BookingStatus;
use crate::model::id::{BookingId, HostelId, UserId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new)]
pub struct CreateBooking {
    pub hostel_id: HostelId,
    pub student_id: UserId,
    pub preferred_date: Option<DateTime<Utc>>,
    pub preferred_time: Option<String>,
    pub message: Option<String>,
}

// Carries the status the caller observed so the write can detect a
// concurrent transition instead of blindly overwriting it.
#[derive(Debug)]
pub struct UpdateBookingStatus {
    pub booking_id: BookingId,
    pub current: BookingStatus,
    pub next: BookingStatus,
}

#[derive(Debug)]
pub struct UpdateBookingDetails {
    pub booking_id: BookingId,
    pub preferred_date: Option<DateTime<Utc>>,
    pub preferred_time: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Default)]
pub struct BookingListFilter {
    pub student_id: Option<UserId>,
    pub agent_id: Option<UserId>,
    pub status: Option<BookingStatus>,
}
