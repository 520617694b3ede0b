pub mod field;
pub mod reservation;
pub mod schedule;
