use crate::model::{
    id::{BookingId, HostelId, UserId},
    user::BookingStudent,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    // The allowed-transition table. Pending may be confirmed or cancelled,
    // confirmed may be completed or cancelled, and the two terminal states
    // accept nothing, not even a write of the same value.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub student: BookingStudent,
    pub hostel: BookingHostel,
    pub preferred_date: Option<DateTime<Utc>>,
    pub preferred_time: Option<String>,
    pub message: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

// The slice of the hostel a booking needs to carry: enough to render the
// listing it refers to and to identify the agent who may act on it.
#[derive(Debug)]
pub struct BookingHostel {
    pub hostel_id: HostelId,
    pub title: String,
    pub agent_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::BookingStatus::*;

    #[test]
    fn pending_moves_to_confirmed_or_cancelled() {
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn confirmed_moves_to_completed_or_cancelled() {
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Confirmed.can_transition_to(Confirmed));
    }

    #[test]
    fn terminal_states_accept_nothing() {
        for terminal in [Cancelled, Completed] {
            assert!(terminal.is_terminal());
            for next in [Pending, Confirmed, Cancelled, Completed] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn cancelled_booking_cannot_be_completed_afterwards() {
        // A confirmed booking the student later cancels must stay cancelled.
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Completed));
    }
}
