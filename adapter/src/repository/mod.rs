pub mod auth;
pub mod booking;
pub mod health;
pub mod hostel;
pub mod location;
pub mod notifier;
pub mod school;
pub mod user;
