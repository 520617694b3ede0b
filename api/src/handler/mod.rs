pub mod availability;
pub mod field;
pub mod health;
pub mod reservation;
pub mod schedule;
