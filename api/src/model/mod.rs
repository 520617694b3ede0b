pub mod availability;
pub mod field;
pub mod reservation;
pub mod schedule;
