use async_trait::async_trait;
use dashmap::DashMap;
use log::*;

use crate::error::Error;
use crate::resource::{Location, Resource};

/// A place resources are kept, keyed by location.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Upserts `resource` under its location. A second add for the same
    /// location replaces the first record outright.
    async fn add(&self, resource: Resource) -> Result<(), Error>;

    /// Looks up the record stored under exactly `location`. Unknown locations
    /// yield `Resource::default()`, not an error.
    async fn fetch(&self, location: &Location) -> Result<Resource, Error>;
}

/// Repository that keeps every resource in process memory.
///
/// Concurrent adds to different locations never contend on a single lock, and
/// concurrent adds to the same location resolve last-write-wins.
#[derive(Debug, Default)]
pub struct InMemory {
    resources: DashMap<Location, Resource>,
}

impl InMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl Repository for InMemory {
    async fn add(&self, resource: Resource) -> Result<(), Error> {
        debug!("Storing resource under location: {}", resource.location);
        self.resources.insert(resource.location.clone(), resource);
        Ok(())
    }

    async fn fetch(&self, location: &Location) -> Result<Resource, Error> {
        Ok(self
            .resources
            .get(location)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
