//! HTTP Router

use axum::{
    Router,
    http::{HeaderValue, Method, StatusCode, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use auth::domain::repository::{SessionStore, UserRepository};
use ::post::domain::repository::PostRepository;

use crate::graphql::graphql;
use crate::state::AppState;

/// CORS for the single frontend origin; cookies are allowed
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}

pub fn app_router<A, P>(state: AppState<A, P>, cors: CorsLayer) -> Router
where
    A: UserRepository + SessionStore + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/graphql", post(graphql::<A, P>))
        .route("/health", get(health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// GET /health
async fn health() -> StatusCode {
    StatusCode::OK
}
