//! Command and result types for domain service operations.

pub mod auth;
pub mod bookings;
pub mod catalog;
