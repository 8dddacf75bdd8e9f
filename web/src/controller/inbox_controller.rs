//! Controller for slash commands delivered by Slack.

use crate::params::inbox::InboxParams;
use crate::response::slash_command::SlashCommandResponse;
use crate::{AppState, Error};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};

use domain::command as CommandApi;
use domain::resource as ResourceApi;
use log::*;

/// POST /inbox
///
/// Receives a slash command. Greets the command's `response_url` in the
/// background, then files the resource the command text describes. Text that
/// does not describe a resource is acknowledged with an empty 200.
#[utoipa::path(
    post,
    path = "/inbox",
    request_body(content = InboxParams, content_type = "application/x-www-form-urlencoded"),
    params(
        ("X-Slack-Request-Timestamp" = String, Header, description = "Seconds since the epoch when Slack sent the request"),
        ("X-Slack-Signature" = String, Header, description = "v0=<hex HMAC-SHA256> over version, timestamp and body"),
    ),
    responses(
        (status = 200, description = "Resource stored, or nothing to do (empty body)", body = SlashCommandResponse),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Internal Server Error"),
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Form(params): Form<InboxParams>,
) -> Result<Response, Error> {
    debug!("Received slash command text: {:?}", params.text);

    if let Some(response_url) = params.response_url() {
        // Detached: never awaited, never fails this request
        app_state.notifier.notify(response_url.to_string());
    }

    let Some(command) = CommandApi::parse(&params.text) else {
        return Ok(StatusCode::OK.into_response());
    };

    let resource = ResourceApi::add(app_state.repository.as_ref(), command).await?;

    Ok((
        StatusCode::OK,
        Json(SlashCommandResponse::resource_added(&resource.title)),
    )
        .into_response())
}
