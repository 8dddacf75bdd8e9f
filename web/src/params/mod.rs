//! This module holds typed parameters for endpoint inputs.
//!
//! Slack delivers slash commands as form-encoded bodies carrying many more fields
//! than are used here; the parameter types name only what the handlers read and
//! let the rest fall away during deserialization.

pub(crate) mod inbox;
