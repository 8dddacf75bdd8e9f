//! Parsing of the free text typed after a slash command.
//!
//! The grammar is positional, over whitespace-delimited tokens:
//!
//! ```text
//! <verb> <type> <title word>... <url>
//! ```
//!
//! The verb is not interpreted. Only the last token is ever taken as the
//! location, so a title may contain URL-looking words.

use entity_api::{Location, Resource};
use log::*;

/// Fewest tokens that make an add: verb, type, one title word and a URL.
const MIN_TOKENS: usize = 4;

/// A request to file a resource, as parsed from command text.
#[derive(Clone, Debug, PartialEq)]
pub struct AddResource {
    pub resource_type: String,
    pub title: String,
    pub location: Location,
}

impl AddResource {
    pub fn into_resource(self) -> Resource {
        Resource {
            resource_type: self.resource_type,
            title: self.title,
            location: self.location,
        }
    }
}

/// Parses `text` into an add request. Returns `None` when there are too few
/// tokens, which callers treat as a no-op rather than an error.
///
/// The last token is kept exactly as typed. One that is not a well-formed URI
/// reference yields the empty location instead of rejecting the command.
pub fn parse(text: &str) -> Option<AddResource> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        debug!(
            "Ignoring command with {} token(s), need at least {MIN_TOKENS}",
            tokens.len()
        );
        return None;
    }

    let raw_location = tokens[tokens.len() - 1];
    let location = Location::parse(raw_location).unwrap_or_else(|err| {
        warn!("Could not parse location {raw_location:?} ({err}), storing under the empty location");
        Location::default()
    });

    Some(AddResource {
        resource_type: tokens[1].to_string(),
        title: tokens[2..tokens.len() - 1].join(" "),
        location,
    })
}
