//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::common::Session;
use crate::config::Config;
use crate::domains::auth::JwtService;
use crate::kernel::ServerDeps;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{session_middleware, USER_TOKEN_HEADER};
use crate::server::routes::{graphql_batch_handler, graphql_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Populated by session_middleware
    let session = request
        .extensions()
        .get::<Session>()
        .cloned()
        .unwrap_or_default();

    let context = GraphQLContext::new(state.server_deps.clone(), session);
    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Build the Axum application router from configuration
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt_secret,
        config.jwt_issuer.clone(),
    ));

    let server_deps = ServerDeps::postgres(pool.clone(), jwt_service, &config.campaign_domain);

    build_router(Arc::new(server_deps), pool, &config.allowed_origins)
}

/// Build the router around already-wired dependencies
pub fn build_router(
    server_deps: Arc<ServerDeps>,
    pool: PgPool,
    allowed_origins: &[String],
) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let app_state = AppState {
        db_pool: pool,
        server_deps,
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static(USER_TOKEN_HEADER),
        ]);

    Router::new()
        .route(
            "/graphql",
            post(graphql_handler).get(juniper_axum::graphiql("/graphql", None)),
        )
        .route("/graphql/batch", post(graphql_batch_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(session_middleware))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State (schema for GraphQL handlers)
        .with_state(schema)
}

/// Any origin when none are configured (local development)
fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.is_empty() {
        return AllowOrigin::from(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
