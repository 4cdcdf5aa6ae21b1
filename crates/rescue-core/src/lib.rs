//! Core types and the store trait for the animal rescue records service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The API and storage crates both depend on it.

pub mod animal;
pub mod store;

pub use animal::{Animal, AnimalId, NewAnimal};
pub use store::AnimalStore;
