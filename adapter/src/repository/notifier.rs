use async_trait::async_trait;
use derive_new::new;
use kernel::{model::booking::Booking, repository::notifier::BookingNotifier};
use shared::error::AppResult;

// Stand-in for an outbound channel (mail, SMS). Writes the request to the
// log so agents can be wired up to a real transport later without touching
// the booking flow.
#[derive(new)]
pub struct LoggingBookingNotifier;

#[async_trait]
impl BookingNotifier for LoggingBookingNotifier {
    async fn booking_requested(&self, booking: &Booking) -> AppResult<()> {
        tracing::info!(
            booking_id = %booking.booking_id,
            hostel_id = %booking.hostel.hostel_id,
            agent_id = %booking.hostel.agent_id,
            student = %booking.student.student_name,
            "booking requested"
        );
        Ok(())
    }
}
