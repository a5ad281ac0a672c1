use crate::cli::{Global, Identity, ServeOptions};
use crate::error::handle_panic;
use crate::handlers;
use crate::prelude::*;
use crate::prelude::eprintln;
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

pub const CLASSIFY_PATH: &str = "/bfhl";
pub const CLASSIFY_ALIAS_PATH: &str = "/classify";

type SharedIdentity = Arc<Identity>;

fn classify_routes() -> MethodRouter<SharedIdentity> {
    post(handlers::classify_handler)
        .get(handlers::operation_code)
        .fallback(handlers::not_found)
}

/// Build the router with CORS and panic recovery applied
///
/// Unknown paths and unsupported methods on known paths both answer 404.
pub fn build_router(identity: Identity) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::health).fallback(handlers::not_found))
        .route(CLASSIFY_PATH, classify_routes())
        .route(CLASSIFY_ALIAS_PATH, classify_routes())
        .fallback(handlers::not_found);

    with_middleware(routes).with_state(Arc::new(identity))
}

/// Wrap routes in permissive CORS and turn handler panics into the 500 envelope
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

pub async fn run(options: ServeOptions, identity: Identity, global: Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Starting bfhl server on {}:{}...",
            options.host, options.port
        );
    }

    let addr = f!("{}:{}", options.host, options.port);
    let app_router = build_router(identity);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server is running on http://{addr}");
    if global.verbose {
        eprintln!("Classify endpoint: http://{}{}", addr, CLASSIFY_PATH);
        eprintln!("Alias endpoint: http://{}{}", addr, CLASSIFY_ALIAS_PATH);
    }

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
