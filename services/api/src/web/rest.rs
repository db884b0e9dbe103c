//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::protocol::{
    CourseListParams, CourseResponse, CreateCourseRequest, EnrollRequest, EnrollmentResponse,
    ModulePayload, SearchParams, UpdateCourseRequest,
};
use crate::web::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use course_catalog_core::domain::{Course, CourseId};
use course_catalog_core::ports::PortError;
use std::sync::Arc;
use tracing::{error, warn};
use utoipa::OpenApi;
use uuid::Uuid;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_courses_handler,
        featured_courses_handler,
        search_courses_handler,
        get_course_handler,
        create_course_handler,
        update_course_handler,
        delete_course_handler,
        list_categories_handler,
        enroll_handler,
        user_courses_handler,
    ),
    components(
        schemas(
            CourseResponse,
            ModulePayload,
            CreateCourseRequest,
            UpdateCourseRequest,
            EnrollRequest,
            EnrollmentResponse
        )
    ),
    tags(
        (name = "Course Catalog API", description = "Catalog, admin, and enrollment endpoints for the course storefront.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Helpers
//=========================================================================================

type HandlerError = (StatusCode, String);

/// Maps a port error to a response, logging anything that is not a plain miss.
fn port_error(context: &str, e: PortError) -> HandlerError {
    match e {
        PortError::NotFound(message) => {
            warn!("{}: {}", context, message);
            (StatusCode::NOT_FOUND, message)
        }
        PortError::Unexpected(_) => {
            error!("{}: {:?}", context, e);
            (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
        }
    }
}

fn to_responses(courses: Vec<Course>) -> Vec<CourseResponse> {
    courses.into_iter().map(CourseResponse::from).collect()
}

//=========================================================================================
// Catalog Handlers
//=========================================================================================

/// List courses, optionally narrowed by the catalog filters.
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseListParams),
    responses(
        (status = 200, description = "Matching courses in catalog order", body = Vec<CourseResponse>),
        (status = 400, description = "Malformed query parameters"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_courses_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<CourseListParams>,
) -> Result<impl IntoResponse, HandlerError> {
    let filter = params.into_filter();
    let filter = filter.is_active().then_some(&filter);

    let courses = app_state
        .catalog
        .list_courses(filter)
        .await
        .map_err(|e| port_error("Failed to list courses", e))?;

    Ok(Json(to_responses(courses)))
}

/// List the courses highlighted on the landing page.
#[utoipa::path(
    get,
    path = "/courses/featured",
    responses(
        (status = 200, description = "Featured courses", body = Vec<CourseResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn featured_courses_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let courses = app_state
        .catalog
        .featured_courses()
        .await
        .map_err(|e| port_error("Failed to load featured courses", e))?;

    Ok(Json(to_responses(courses)))
}

/// Quick search over course titles and descriptions.
#[utoipa::path(
    get,
    path = "/courses/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Courses whose title or description matches", body = Vec<CourseResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_courses_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, HandlerError> {
    let courses = app_state
        .catalog
        .search_courses(&params.q)
        .await
        .map_err(|e| port_error("Failed to search courses", e))?;

    Ok(Json(to_responses(courses)))
}

/// Fetch a single course.
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = String, Path, description = "The course id.")),
    responses(
        (status = 200, description = "The course", body = CourseResponse),
        (status = 404, description = "No course has this id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_course_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let course = app_state
        .catalog
        .get_course(&CourseId::from(id))
        .await
        .map_err(|e| port_error("Failed to load course", e))?;

    Ok(Json(CourseResponse::from(course)))
}

/// List the distinct course categories in first-seen order.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category names", body = Vec<String>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_categories_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let categories = app_state
        .catalog
        .categories()
        .await
        .map_err(|e| port_error("Failed to list categories", e))?;

    Ok(Json(categories))
}

//=========================================================================================
// Admin Handlers
//=========================================================================================

/// Create a course. Ratings and reviews start at zero and the course is not featured.
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid course fields"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_course_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    req.validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let course = app_state
        .catalog
        .create_course(req.into())
        .await
        .map_err(|e| port_error("Failed to create course", e))?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

/// Update the given fields of a course, leaving the rest untouched.
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(("id" = String, Path, description = "The course id.")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "The updated course", body = CourseResponse),
        (status = 400, description = "Invalid course fields"),
        (status = 404, description = "No course has this id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_course_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    req.validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let course = app_state
        .catalog
        .update_course(&CourseId::from(id), req.into())
        .await
        .map_err(|e| port_error("Failed to update course", e))?;

    Ok(Json(CourseResponse::from(course)))
}

/// Delete a course and return the removed record.
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = String, Path, description = "The course id.")),
    responses(
        (status = 200, description = "The removed course", body = CourseResponse),
        (status = 404, description = "No course has this id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_course_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let course = app_state
        .catalog
        .delete_course(&CourseId::from(id))
        .await
        .map_err(|e| port_error("Failed to delete course", e))?;

    Ok(Json(CourseResponse::from(course)))
}

//=========================================================================================
// Enrollment Handlers
//=========================================================================================

/// Enroll a user in a course. Enrolling again returns the existing enrollment.
#[utoipa::path(
    post,
    path = "/users/{user_id}/enrollments",
    params(("user_id" = Uuid, Path, description = "The unique ID of the user.")),
    request_body = EnrollRequest,
    responses(
        (status = 201, description = "Enrollment recorded", body = EnrollmentResponse),
        (status = 400, description = "Malformed user id or body"),
        (status = 404, description = "No course has this id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn enroll_handler(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<EnrollRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let enrollment = app_state
        .enrollments
        .enroll(user_id, &CourseId::from(req.course_id))
        .await
        .map_err(|e| port_error("Failed to enroll user", e))?;

    Ok((StatusCode::CREATED, Json(EnrollmentResponse::from(enrollment))))
}

/// List the courses a user is enrolled in.
#[utoipa::path(
    get,
    path = "/users/{user_id}/courses",
    params(("user_id" = Uuid, Path, description = "The unique ID of the user.")),
    responses(
        (status = 200, description = "Enrolled courses, oldest first", body = Vec<CourseResponse>),
        (status = 400, description = "Malformed user id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn user_courses_handler(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, HandlerError> {
    let courses = app_state
        .enrollments
        .courses_for_user(user_id)
        .await
        .map_err(|e| port_error("Failed to load user courses", e))?;

    Ok(Json(to_responses(courses)))
}
