//! services/api/src/adapters/memory.rs
//!
//! This module contains the in-memory catalog adapter, the concrete implementation
//! of the `CatalogService` and `EnrollmentService` ports from the `core` crate.
//!
//! Every call first awaits the injected `LatencyPolicy`, then does its work in one
//! synchronous step under the state lock. The lock is never held across the pause.
//! Mutations run on a spawned task, so a caller that gives up while waiting does
//! not cancel them.

use async_trait::async_trait;
use chrono::Utc;
use course_catalog_core::domain::{
    Course, CourseId, CoursePatch, Enrollment, FilterSpec, NewCourse,
};
use course_catalog_core::ports::{
    CatalogOperation, CatalogService, EnrollmentService, LatencyPolicy, PortError, PortResult,
};
use course_catalog_core::query;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::seed;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

#[derive(Default)]
struct CatalogState {
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
}

impl CatalogState {
    fn position(&self, id: &CourseId) -> PortResult<usize> {
        self.courses
            .iter()
            .position(|course| &course.id == id)
            .ok_or_else(|| not_found(id))
    }
}

/// An in-memory catalog that implements the store ports.
///
/// Cloning is cheap and every clone shares the same courses.
#[derive(Clone)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<CatalogState>>,
    latency: Arc<dyn LatencyPolicy>,
}

impl InMemoryCatalog {
    /// Creates a catalog holding `courses` in the given order.
    pub fn new(courses: Vec<Course>, latency: Arc<dyn LatencyPolicy>) -> Self {
        Self {
            state: Arc::new(RwLock::new(CatalogState {
                courses,
                enrollments: Vec::new(),
            })),
            latency,
        }
    }

    /// Creates a catalog preloaded with the demo courses.
    pub fn seeded(latency: Arc<dyn LatencyPolicy>) -> Self {
        Self::new(seed::demo_catalog(), latency)
    }

    pub fn empty(latency: Arc<dyn LatencyPolicy>) -> Self {
        Self::new(Vec::new(), latency)
    }
}

//=========================================================================================
// Mutations
//=========================================================================================

/// Runs a mutation on its own task. The caller may stop waiting for the result,
/// but the pause and the write still complete.
async fn detached<T, F>(work: F) -> PortResult<T>
where
    F: Future<Output = PortResult<T>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(work)
        .await
        .map_err(|e| PortError::Unexpected(format!("store task failed: {}", e)))?
}

impl InMemoryCatalog {
    async fn create_step(&self, fields: NewCourse) -> PortResult<Course> {
        self.latency.pause(CatalogOperation::Create).await;
        let course = Course::from_new(CourseId::generate(), fields);
        warn_on_inconsistent_pricing(&course);

        let mut state = self.state.write().await;
        state.courses.push(course.clone());
        info!(course_id = %course.id, title = %course.title, "created course");
        Ok(course)
    }

    async fn update_step(&self, id: CourseId, patch: CoursePatch) -> PortResult<Course> {
        self.latency.pause(CatalogOperation::Update).await;
        let mut state = self.state.write().await;
        let index = state.position(&id)?;
        let course = &mut state.courses[index];
        course.apply_patch(patch);
        warn_on_inconsistent_pricing(course);
        info!(course_id = %course.id, "updated course");
        Ok(course.clone())
    }

    async fn delete_step(&self, id: CourseId) -> PortResult<Course> {
        self.latency.pause(CatalogOperation::Delete).await;
        let mut state = self.state.write().await;
        let index = state.position(&id)?;
        let removed = state.courses.remove(index);
        state.enrollments.retain(|e| e.course_id != removed.id);
        info!(course_id = %removed.id, "deleted course");
        Ok(removed)
    }

    async fn enroll_step(&self, user_id: Uuid, course_id: CourseId) -> PortResult<Enrollment> {
        self.latency.pause(CatalogOperation::Enroll).await;
        let mut state = self.state.write().await;
        state.position(&course_id)?;

        if let Some(existing) = state
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
        {
            return Ok(existing.clone());
        }

        let enrollment = Enrollment {
            user_id,
            course_id: course_id.clone(),
            enrolled_at: Utc::now(),
        };
        state.enrollments.push(enrollment.clone());
        info!(%user_id, %course_id, "enrolled user");
        Ok(enrollment)
    }
}

fn not_found(id: &CourseId) -> PortError {
    PortError::NotFound(format!("Course {} not found", id))
}

fn warn_on_inconsistent_pricing(course: &Course) {
    if !course.has_consistent_pricing() {
        warn!(
            course_id = %course.id,
            price = course.price,
            original_price = ?course.original_price,
            "original price is lower than the current price"
        );
    }
}

//=========================================================================================
// `CatalogService` Trait Implementation
//=========================================================================================

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn list_courses(&self, filter: Option<&FilterSpec>) -> PortResult<Vec<Course>> {
        self.latency.pause(CatalogOperation::List).await;
        let state = self.state.read().await;
        let courses = match filter {
            Some(filter) => query::apply(&state.courses, filter),
            None => state.courses.clone(),
        };
        debug!(
            filtered = filter.is_some_and(FilterSpec::is_active),
            count = courses.len(),
            "listed courses"
        );
        Ok(courses)
    }

    async fn get_course(&self, id: &CourseId) -> PortResult<Course> {
        self.latency.pause(CatalogOperation::Get).await;
        let state = self.state.read().await;
        let index = state.position(id)?;
        Ok(state.courses[index].clone())
    }

    async fn create_course(&self, fields: NewCourse) -> PortResult<Course> {
        let store = self.clone();
        detached(async move { store.create_step(fields).await }).await
    }

    async fn update_course(&self, id: &CourseId, patch: CoursePatch) -> PortResult<Course> {
        let store = self.clone();
        let id = id.clone();
        detached(async move { store.update_step(id, patch).await }).await
    }

    async fn delete_course(&self, id: &CourseId) -> PortResult<Course> {
        let store = self.clone();
        let id = id.clone();
        detached(async move { store.delete_step(id).await }).await
    }

    async fn featured_courses(&self) -> PortResult<Vec<Course>> {
        self.latency.pause(CatalogOperation::Featured).await;
        let state = self.state.read().await;
        Ok(state
            .courses
            .iter()
            .filter(|course| course.featured)
            .cloned()
            .collect())
    }

    async fn categories(&self) -> PortResult<Vec<String>> {
        self.latency.pause(CatalogOperation::Categories).await;
        let state = self.state.read().await;
        let mut seen = HashSet::new();
        let categories = state
            .courses
            .iter()
            .filter(|course| seen.insert(course.category.as_str()))
            .map(|course| course.category.clone())
            .collect();
        Ok(categories)
    }

    async fn search_courses(&self, query_text: &str) -> PortResult<Vec<Course>> {
        self.latency.pause(CatalogOperation::Search).await;
        let state = self.state.read().await;
        let courses = query::search_title_description(&state.courses, query_text);
        debug!(query = query_text, count = courses.len(), "searched courses");
        Ok(courses)
    }
}

//=========================================================================================
// `EnrollmentService` Trait Implementation
//=========================================================================================

#[async_trait]
impl EnrollmentService for InMemoryCatalog {
    async fn enroll(&self, user_id: Uuid, course_id: &CourseId) -> PortResult<Enrollment> {
        let store = self.clone();
        let course_id = course_id.clone();
        detached(async move { store.enroll_step(user_id, course_id).await }).await
    }

    async fn courses_for_user(&self, user_id: Uuid) -> PortResult<Vec<Course>> {
        self.latency.pause(CatalogOperation::UserCourses).await;
        let state = self.state.read().await;
        let courses = state
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter_map(|e| state.courses.iter().find(|c| c.id == e.course_id))
            .cloned()
            .collect();
        Ok(courses)
    }
}
