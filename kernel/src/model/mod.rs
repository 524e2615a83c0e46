pub mod auth;
pub mod booking;
pub mod hostel;
pub mod id;
pub mod location;
pub mod permission;
pub mod role;
pub mod school;
pub mod user;
