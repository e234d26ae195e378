use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::modules::exports::router::init_exports_router;
use crate::modules::groups::router::init_groups_router;
use crate::modules::roster::router::{init_roster_router, init_selection_router};
use crate::modules::students::router::init_group_students_router;
use crate::modules::submission::router::init_submission_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/roster", init_roster_router())
                .nest("/selection", init_selection_router())
                .nest(
                    "/groups",
                    init_groups_router()
                        .nest("/{name}/students", init_group_students_router()),
                )
                .nest("/exports", init_exports_router())
                .nest("/submission", init_submission_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .server_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
        })
        .layer(TraceLayer::new_for_http())
}
