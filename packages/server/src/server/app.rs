//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::server::routes::{
    create_lead_handler, delete_lead_handler, get_lead_handler, health_handler,
    list_leads_handler, login_handler, signup_handler, update_lead_handler,
};

/// Shared application state
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
    pub bcrypt_cost: u32,
}

/// Build the CORS layer for the configured browser origin
///
/// No origin configured means any origin (local development).
fn build_cors(allowed_origin: Option<&str>) -> Result<CorsLayer> {
    let origin = match allowed_origin {
        Some(origin) => AllowOrigin::exact(
            HeaderValue::from_str(origin).context("ALLOWED_ORIGIN is not a valid header value")?,
        ),
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]))
}

/// Build the Axum application router
pub fn build_app(
    pool: PgPool,
    jwt_service: Arc<JwtService>,
    bcrypt_cost: u32,
    allowed_origin: Option<&str>,
) -> Result<Router> {
    let app_state = AxumAppState {
        db_pool: pool,
        jwt_service,
        bcrypt_cost,
    };

    let cors = build_cors(allowed_origin)?;

    let app = Router::new()
        // Public
        .route("/health", get(health_handler))
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        // Protected (handlers take the AuthAgent extractor)
        .route("/leads", post(create_lead_handler).get(list_leads_handler))
        .route(
            "/leads/:id",
            put(update_lead_handler)
                .delete(delete_lead_handler)
                .get(get_lead_handler),
        )
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
