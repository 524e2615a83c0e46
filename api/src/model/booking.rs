use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::{
        event::{BookingListFilter, CreateBooking},
        Booking, BookingStatus,
    },
    id::{BookingId, HostelId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub hostel_id: HostelId,
    #[garde(skip)]
    pub preferred_date: Option<DateTime<Utc>>,
    #[garde(inner(length(min = 1, max = 32)))]
    pub preferred_time: Option<String>,
    #[garde(inner(length(max = 1000)))]
    pub message: Option<String>,
}

impl CreateBookingRequest {
    pub fn into_event(self, student_id: UserId) -> CreateBooking {
        let CreateBookingRequest {
            hostel_id,
            preferred_date,
            preferred_time,
            message,
        } = self;
        CreateBooking::new(hostel_id, student_id, preferred_date, preferred_time, message)
    }
}

// Status and detail changes share one request; any subset of fields may be
// present.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(skip)]
    pub status: Option<BookingStatus>,
    #[garde(skip)]
    pub preferred_date: Option<DateTime<Utc>>,
    #[garde(inner(length(min = 1, max = 32)))]
    pub preferred_time: Option<String>,
    #[garde(inner(length(max = 1000)))]
    pub message: Option<String>,
}

impl UpdateBookingRequest {
    pub fn has_detail_changes(&self) -> bool {
        self.preferred_date.is_some() || self.preferred_time.is_some() || self.message.is_some()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
}

impl BookingListQuery {
    // Listing is always scoped to the caller; students see their own
    // bookings, agents the ones against their hostels, admins everything.
    pub fn into_filter_for(
        self,
        user: &kernel::model::user::User,
    ) -> BookingListFilter {
        use kernel::model::role::Role;
        let mut filter = BookingListFilter {
            status: self.status,
            ..Default::default()
        };
        match user.role {
            Role::Student => filter.student_id = Some(user.user_id),
            Role::Agent => filter.agent_id = Some(user.user_id),
            Role::Admin => {}
        }
        filter
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
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
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            student,
            hostel,
            preferred_date,
            preferred_time,
            message,
            status,
            created_at,
        } = value;
        Self {
            booking_id,
            student_id: student.student_id,
            student_name: student.student_name,
            student_email: student.email,
            hostel_id: hostel.hostel_id,
            hostel_title: hostel.title,
            agent_id: hostel.agent_id,
            preferred_date,
            preferred_time,
            message,
            status,
            created_at,
        }
    }
}
