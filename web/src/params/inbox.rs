use serde::Deserialize;
use utoipa::ToSchema;

/// Form fields read from a slash command delivery.
///
/// # Fields
///
/// * `text` - Everything the user typed after the command name
/// * `response_url` - Where Slack accepts follow-up messages for this command
#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct InboxParams {
    #[serde(default)]
    pub(crate) text: String,
    #[serde(default)]
    pub(crate) response_url: String,
}

impl InboxParams {
    /// The `response_url`, unless Slack sent none.
    pub(crate) fn response_url(&self) -> Option<&str> {
        let url = self.response_url.trim();
        (!url.is_empty()).then_some(url)
    }
}
