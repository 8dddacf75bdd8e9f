use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// The key a resource is stored under.
///
/// Holds the location token exactly as it was typed. Two spellings of the same
/// address (`http://x.com` and `http://x.com/`) are two different keys, and
/// scheme-less references such as `example.com` are kept as they are. Only a
/// malformed token is refused, and callers then fall back to the empty location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location(Option<String>);

impl Location {
    pub fn parse(raw: &str) -> Result<Self, Error> {
        if raw.is_empty() {
            return Ok(Self::default());
        }

        check_reference(raw)?;
        Ok(Self(Some(raw.to_string())))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts absolute URLs and relative references. Rejects control characters,
/// bad percent escapes outside the query, an unusable authority, and a
/// scheme-less reference whose first segment holds a colon.
fn check_reference(raw: &str) -> Result<(), Error> {
    if raw.chars().any(|c| c.is_ascii_control()) {
        return Err(Error::invalid_location(&format!(
            "{raw:?} contains a control character"
        )));
    }

    let (before_fragment, fragment) = raw.split_once('#').unwrap_or((raw, ""));
    let before_query = before_fragment
        .split_once('?')
        .map_or(before_fragment, |(head, _)| head);

    if has_bad_escape(before_query) || has_bad_escape(fragment) {
        return Err(Error::invalid_location(&format!(
            "{raw:?} has an invalid percent escape"
        )));
    }

    match Url::parse(raw) {
        Ok(_) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let first_segment = before_query.split('/').next().unwrap_or_default();
            if first_segment.contains(':') {
                return Err(Error::invalid_location(&format!(
                    "{raw:?} has a colon in its first path segment"
                )));
            }

            // Resolving against any base still checks a `//host:port` authority
            Url::parse("http://localhost/")
                .and_then(|base| base.join(raw))
                .map(|_| ())
                .map_err(|err| Error::invalid_location(&format!("{raw:?}: {err}")))
        }
        Err(err) => Err(Error::invalid_location(&format!("{raw:?}: {err}"))),
    }
}

fn has_bad_escape(part: &str) -> bool {
    let bytes = part.as_bytes();
    bytes.iter().enumerate().any(|(i, byte)| {
        *byte == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}

/// A link shared with the community, filed under a type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub title: String,
    pub location: Location,
}

impl Resource {
    /// Fetching an unknown location yields the default record, so an
    /// all-default record means "not found".
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
