use crate::{
    controller::{health_check_controller, inbox_controller},
    middleware::slack_verification::require_slack_signature,
    params, response, AppState,
};
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI document. To be a part
// of the rendered document, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Resourceful API"
        ),
        paths(
            health_check_controller::health_check,
            inbox_controller::create,
        ),
        components(
            schemas(
                params::inbox::InboxParams,
                response::slash_command::SlashCommandResponse,
                response::slash_command::Attachment,
            )
        ),
        tags(
            (name = "resourceful", description = "Slack slash command receiver for sharing resources")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(inbox_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

/// Routes for inbound slash commands. Signature verification is layered on
/// only when validation is enabled.
fn inbox_routes(app_state: AppState) -> Router {
    let router = Router::new().route("/inbox", post(inbox_controller::create));

    let router = if app_state.config.with_validation {
        router.route_layer(from_fn_with_state(
            app_state.clone(),
            require_slack_signature,
        ))
    } else {
        router
    };

    router.with_state(app_state)
}
