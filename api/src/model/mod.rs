pub mod auth;
pub mod booking;
pub mod hostel;
pub mod school;
pub mod user;
