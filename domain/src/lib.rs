//! This module re-exports the resource types from the `entity_api` crate.
//!
//! Consumers of the `domain` crate work with resources, locations and the repository trait
//! through these re-exports and never depend on `entity_api` directly.
pub use entity_api::{
    repository::{InMemory, Repository},
    Location, Resource,
};

pub mod command;
pub mod error;
pub mod resource;
pub mod verification;

pub mod gateway;
