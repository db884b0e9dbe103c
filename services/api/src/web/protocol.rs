//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between the storefront client and the API
//! server, and their conversions to and from the core domain types. Field names
//! are camelCase on the wire.

use chrono::{DateTime, Utc};
use course_catalog_core::domain::{
    Course, CourseModule, CoursePatch, Enrollment, FilterSpec, NewCourse, PriceRange,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

//=========================================================================================
// Payloads Sent FROM the Server TO the Client
//=========================================================================================

/// A module and its ordered lesson labels.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ModulePayload {
    pub title: String,
    pub lessons: Vec<String>,
}

impl From<CourseModule> for ModulePayload {
    fn from(module: CourseModule) -> Self {
        Self {
            title: module.title,
            lessons: module.lessons,
        }
    }
}

impl From<ModulePayload> for CourseModule {
    fn from(payload: ModulePayload) -> Self {
        Self {
            title: payload.title,
            lessons: payload.lessons,
        }
    }
}

/// A course as rendered by the catalog, detail, and checkout views.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub level: String,
    pub price: f64,
    pub original_price: Option<f64>,
    /// `originalPrice - price` when the course is marked down.
    pub savings: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    pub featured: bool,
    pub duration: String,
    pub lesson_count: usize,
    pub modules: Vec<ModulePayload>,
    pub thumbnail: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        let savings = course.savings();
        let lesson_count = course.lesson_count();
        Self {
            id: course.id.to_string(),
            title: course.title,
            description: course.description,
            instructor: course.instructor,
            category: course.category,
            level: course.level,
            price: course.price,
            original_price: course.original_price,
            savings,
            rating: course.rating,
            review_count: course.review_count,
            featured: course.featured,
            duration: course.duration,
            lesson_count,
            modules: course.modules.into_iter().map(Into::into).collect(),
            thumbnail: course.thumbnail,
        }
    }
}

/// Confirms a user's access to a course.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponse {
    pub user_id: Uuid,
    pub course_id: String,
    pub enrolled_at: DateTime<Utc>,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            user_id: enrollment.user_id,
            course_id: enrollment.course_id.to_string(),
            enrolled_at: enrollment.enrolled_at,
        }
    }
}

//=========================================================================================
// Payloads Sent FROM the Client TO the Server
//=========================================================================================

/// The admin form for a new course.
#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub level: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub duration: String,
    #[serde(default)]
    pub modules: Vec<ModulePayload>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl CreateCourseRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_price("price", Some(self.price))?;
        check_price("originalPrice", self.original_price)
    }
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            instructor: req.instructor,
            category: req.category,
            level: req.level,
            price: req.price,
            original_price: req.original_price,
            duration: req.duration,
            modules: req.modules.into_iter().map(Into::into).collect(),
            thumbnail: req.thumbnail,
        }
    }
}

/// A partial course update. Omitted fields are left as they are.
#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
    /// An explicit `null` removes the original price.
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub original_price: Option<Option<f64>>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub featured: Option<bool>,
    pub duration: Option<String>,
    pub modules: Option<Vec<ModulePayload>>,
    /// An explicit `null` removes the thumbnail.
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub thumbnail: Option<Option<String>>,
}

/// Keeps a present `null` apart from an omitted field: omitted stays `None`
/// through `#[serde(default)]`, while `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateCourseRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_price("price", self.price)?;
        check_price("originalPrice", self.original_price.flatten())?;
        match self.rating {
            Some(rating) if !(0.0..=5.0).contains(&rating) => {
                Err("rating must be between 0 and 5".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            instructor: req.instructor,
            category: req.category,
            level: req.level,
            price: req.price,
            original_price: req.original_price,
            rating: req.rating,
            review_count: req.review_count,
            featured: req.featured,
            duration: req.duration,
            modules: req
                .modules
                .map(|modules| modules.into_iter().map(Into::into).collect()),
            thumbnail: req.thumbnail,
        }
    }
}

fn check_price(field: &str, price: Option<f64>) -> Result<(), String> {
    match price {
        Some(p) if !p.is_finite() || p < 0.0 => {
            Err(format!("{} must be a non-negative number", field))
        }
        _ => Ok(()),
    }
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub course_id: String,
}

/// Query parameters for the catalog listing.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CourseListParams {
    /// Matches title, description, or instructor, ignoring case.
    pub search: Option<String>,
    /// Comma-separated category names.
    pub categories: Option<String>,
    /// Comma-separated level names.
    pub levels: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
}

impl CourseListParams {
    /// Converts the query string into a filter. A single price bound leaves the
    /// other side open.
    pub fn into_filter(self) -> FilterSpec {
        let price_range = match (self.min_price, self.max_price) {
            (None, None) => None,
            (low, high) => Some(PriceRange::new(
                low.unwrap_or(0.0),
                high.unwrap_or(f64::INFINITY),
            )),
        };

        FilterSpec {
            search: self.search,
            categories: self.categories.as_deref().map(split_list),
            levels: self.levels.as_deref().map(split_list),
            price_range,
            min_rating: self.min_rating,
        }
    }
}

fn split_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Matches title or description, ignoring case.
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_become_a_filter() {
        let params = CourseListParams {
            search: Some("react".to_string()),
            categories: Some("Web Development, Design,".to_string()),
            levels: None,
            min_price: None,
            max_price: Some(100.0),
            min_rating: Some(4.0),
        };

        let filter = params.into_filter();
        assert_eq!(filter.search.as_deref(), Some("react"));
        let categories: Vec<String> = filter.categories.unwrap().into_iter().collect();
        assert_eq!(categories, vec!["Design", "Web Development"]);
        assert!(filter.levels.is_none());
        let range = filter.price_range.unwrap();
        assert_eq!((range.low, range.high), (0.0, 100.0));
        assert_eq!(filter.min_rating, Some(4.0));
    }

    #[test]
    fn missing_price_bounds_leave_range_unset() {
        assert!(CourseListParams::default().into_filter().price_range.is_none());
    }

    #[test]
    fn negative_prices_are_rejected() {
        let req = UpdateCourseRequest {
            price: Some(-1.0),
            ..Default::default()
        };
        assert!(req.validate().is_err());

        let req = UpdateCourseRequest {
            rating: Some(5.5),
            ..Default::default()
        };
        assert!(req.validate().is_err());

        assert!(UpdateCourseRequest::default().validate().is_ok());
    }

    #[test]
    fn explicit_null_clears_while_omitted_keeps() {
        let req: UpdateCourseRequest =
            serde_json::from_str(r#"{"originalPrice": null, "price": 20.0}"#).unwrap();
        assert_eq!(req.original_price, Some(None));
        assert_eq!(req.thumbnail, None);

        let patch = CoursePatch::from(req);
        assert_eq!(patch.original_price, Some(None));
        assert_eq!(patch.thumbnail, None);

        let req: UpdateCourseRequest =
            serde_json::from_str(r#"{"originalPrice": -3.0}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
