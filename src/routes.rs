// src/routes.rs

use axum::{
    Router,
    http::Method,
    middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{achievement, assessment, auth, catalog, path, user},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Public: auth, track/module catalogs, assessment questions, health.
/// * Protected (bearer token): user state, submission, path, achievements.
/// * Global middleware: Trace, CORS.
pub fn create_router(state: AppState) -> Router {
    let origins: [axum::http::HeaderValue; 2] = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let assessment_routes = Router::new()
        .route("/{track}", get(assessment::get_assessment))
        .merge(
            Router::new()
                .route("/{track}/submit", post(assessment::submit_assessment))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    let protected_routes = Router::new()
        .route("/user", get(user::get_me).put(user::update_me))
        .route("/path", get(path::get_path))
        .route("/path/complete", post(path::complete_module))
        .route("/path/adapt", post(path::adapt_path))
        .route("/achievements", get(achievement::get_achievements))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/assessments", assessment_routes)
        .nest("/api", protected_routes)
        .route("/api/tracks", get(catalog::list_tracks))
        .route("/api/modules", get(catalog::list_modules))
        .route("/api/health", get(catalog::health))
        // Global middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
