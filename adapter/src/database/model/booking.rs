use kernel::model::{
    booking::{Booking, BookingHostel, BookingStatus},
    id::{BookingId, HostelId, UserId},
    user::BookingStudent,
};
use chrono::{DateTime, Utc};
use shared::error::AppError;
use std::str::FromStr;

// A booking joined with its student and the hostel it refers to.
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub student_id: UserId,
    pub student_name: String,
    pub student_email: String,
    pub hostel_id: HostelId,
    pub hostel_title: String,
    pub agent_id: UserId,
    pub preferred_date: Option<DateTime<Utc>>,
    pub preferred_time: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            student_id,
            student_name,
            student_email,
            hostel_id,
            hostel_title,
            agent_id,
            preferred_date,
            preferred_time,
            message,
            status,
            created_at,
        } = value;
        Ok(Booking {
            booking_id,
            student: BookingStudent {
                student_id,
                student_name,
                email: student_email,
            },
            hostel: BookingHostel {
                hostel_id,
                title: hostel_title,
                agent_id,
            },
            preferred_date,
            preferred_time,
            message,
            status: BookingStatus::from_str(&status)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            created_at,
        })
    }
}
