pub mod admin;
pub mod auth;
pub mod booking;
pub mod health;
pub mod hostel;
pub mod school;
pub mod v1;
