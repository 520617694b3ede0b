pub mod field;
pub mod id;
pub mod reservation;
pub mod schedule;
