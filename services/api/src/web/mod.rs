pub mod middleware;
pub mod protocol;
pub mod rest;
pub mod state;

// Re-export the handlers so the binary and the tests can build the same router.
pub use middleware::trace_requests;
pub use rest::{
    create_course_handler, delete_course_handler, enroll_handler, featured_courses_handler,
    get_course_handler, list_categories_handler, list_courses_handler, search_courses_handler,
    update_course_handler, user_courses_handler,
};

use crate::error::ApiError;
use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Builds the API router with CORS and request tracing applied.
pub fn api_router(app_state: Arc<AppState>) -> Result<Router, ApiError> {
    let origin = app_state
        .config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| ApiError::Internal(format!("Invalid ALLOWED_ORIGIN: {}", e)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    let catalog_routes = Router::new()
        .route("/courses", get(list_courses_handler).post(create_course_handler))
        .route("/courses/featured", get(featured_courses_handler))
        .route("/courses/search", get(search_courses_handler))
        .route(
            "/courses/{id}",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
        .route("/categories", get(list_categories_handler));

    let enrollment_routes = Router::new()
        .route("/users/{user_id}/enrollments", post(enroll_handler))
        .route("/users/{user_id}/courses", get(user_courses_handler));

    Ok(Router::new()
        .merge(catalog_routes)
        .merge(enrollment_routes)
        .layer(axum_middleware::from_fn(trace_requests))
        .layer(cors)
        .with_state(app_state))
}
