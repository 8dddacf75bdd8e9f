//! Storage for resources shared through the slash command.
//!
//! Handlers only ever talk to the `Repository` trait; `InMemory` is the store
//! the server runs with.

pub use resource::{Location, Resource};

pub mod error;
pub mod repository;
pub mod resource;
