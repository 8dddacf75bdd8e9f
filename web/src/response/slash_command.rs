//! Bodies returned to Slack in answer to a slash command.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message shown in the channel when a resource is accepted.
pub(crate) const ACKNOWLEDGMENT: &str = "I got you fam. Adding that resource right now.";

/// Replies with this response type are visible to the whole channel.
pub(crate) const IN_CHANNEL: &str = "in_channel";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct Attachment {
    pub(crate) text: String,
}

/// Slack message payload answering a slash command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct SlashCommandResponse {
    pub(crate) response_type: String,
    pub(crate) text: String,
    pub(crate) attachments: Vec<Attachment>,
}

impl SlashCommandResponse {
    /// In-channel acknowledgment for a resource stored under `title`.
    pub(crate) fn resource_added(title: &str) -> Self {
        Self {
            response_type: IN_CHANNEL.to_string(),
            text: ACKNOWLEDGMENT.to_string(),
            attachments: vec![Attachment {
                text: format!("{title} resource added. Please find it here: URL_PLACEHOLDER"),
            }],
        }
    }
}
