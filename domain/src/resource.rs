use crate::command::AddResource;
use crate::error::Error;
use entity_api::{repository::Repository, Location, Resource};
use log::*;

/// Files the resource described by `command`, replacing anything already
/// stored under the same location.
pub async fn add(repository: &dyn Repository, command: AddResource) -> Result<Resource, Error> {
    let resource = command.into_resource();
    repository.add(resource.clone()).await?;

    info!(
        "Added {} resource \"{}\" at {}",
        resource.resource_type, resource.title, resource.location
    );
    Ok(resource)
}

/// Returns the resource stored at `location`, or `None` when nothing is.
pub async fn find_by_location(
    repository: &dyn Repository,
    location: &Location,
) -> Result<Option<Resource>, Error> {
    let resource = repository.fetch(location).await?;
    Ok((!resource.is_empty()).then_some(resource))
}
