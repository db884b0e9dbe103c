//! crates/course_catalog_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the catalog's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the concrete store and of how latency is simulated.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Course, CourseId, CoursePatch, Enrollment, FilterSpec, NewCourse};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The authoritative collection of courses.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Lists every course, or only those matching `filter`, in store order.
    async fn list_courses(&self, filter: Option<&FilterSpec>) -> PortResult<Vec<Course>>;

    async fn get_course(&self, id: &CourseId) -> PortResult<Course>;

    /// Stores a new course under a freshly generated id.
    async fn create_course(&self, fields: NewCourse) -> PortResult<Course>;

    async fn update_course(&self, id: &CourseId, patch: CoursePatch) -> PortResult<Course>;

    /// Removes a course and returns the removed record.
    async fn delete_course(&self, id: &CourseId) -> PortResult<Course>;

    async fn featured_courses(&self) -> PortResult<Vec<Course>>;

    /// Distinct categories in the order they first appear.
    async fn categories(&self) -> PortResult<Vec<String>>;

    /// Title/description search for the header search box.
    async fn search_courses(&self, query: &str) -> PortResult<Vec<Course>>;
}

/// Tracks which courses each user has access to.
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Enrolls a user in a course. Enrolling twice returns the first enrollment.
    async fn enroll(&self, user_id: Uuid, course_id: &CourseId) -> PortResult<Enrollment>;

    /// The user's enrolled courses, oldest enrollment first.
    async fn courses_for_user(&self, user_id: Uuid) -> PortResult<Vec<Course>>;
}

/// The store operations a latency policy can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOperation {
    List,
    Featured,
    Get,
    UserCourses,
    Categories,
    Search,
    Create,
    Update,
    Delete,
    Enroll,
}

impl CatalogOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogOperation::List => "list",
            CatalogOperation::Featured => "featured",
            CatalogOperation::Get => "get",
            CatalogOperation::UserCourses => "user_courses",
            CatalogOperation::Categories => "categories",
            CatalogOperation::Search => "search",
            CatalogOperation::Create => "create",
            CatalogOperation::Update => "update",
            CatalogOperation::Delete => "delete",
            CatalogOperation::Enroll => "enroll",
        }
    }
}

/// Decides how long a store call is suspended before it does its work.
#[async_trait]
pub trait LatencyPolicy: Send + Sync {
    async fn pause(&self, operation: CatalogOperation);
}
