use crate::model::{
    id::{SchoolId, UserId},
    role::Role,
};

pub mod event;

// The password hash never leaves the adapter layer, so it is absent here by
// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub role: Role,
    pub verified_status: bool,
    pub school_id: Option<SchoolId>,
}

#[derive(Debug)]
pub struct HostelAgent {
    pub agent_id: UserId,
    pub agent_name: String,
}

#[derive(Debug)]
pub struct BookingStudent {
    pub student_id: UserId,
    pub student_name: String,
    pub email: String,
}
