pub mod availability;
pub mod interval;
pub mod model;
pub mod notifier;
pub mod pricing;
pub mod repository;
pub mod service;
#[cfg(test)]
pub mod testing;
