//! crates/course_catalog_core/src/domain.rs
//!
//! Defines the pure, core data structures for the catalog.
//! These structs are independent of any storage or serialization format.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

//=========================================================================================
// Courses
//=========================================================================================

/// Opaque identifier of a course. Never changes once a course is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identifier that has never been handed out before.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CourseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A titled group of lessons. Lessons are plain labels shown in order.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseModule {
    pub title: String,
    pub lessons: Vec<String>,
}

/// A catalog item with pricing, metadata, and nested module/lesson content.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub level: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    pub featured: bool,
    /// Free-text label such as "52 hours".
    pub duration: String,
    pub modules: Vec<CourseModule>,
    pub thumbnail: Option<String>,
}

impl Course {
    /// Builds a stored record from admin-supplied fields. Review data starts at zero
    /// and new courses are never featured.
    pub fn from_new(id: CourseId, fields: NewCourse) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            instructor: fields.instructor,
            category: fields.category,
            level: fields.level,
            price: fields.price,
            original_price: fields.original_price,
            rating: 0.0,
            review_count: 0,
            featured: false,
            duration: fields.duration,
            modules: fields.modules,
            thumbnail: fields.thumbnail,
        }
    }

    /// Shallow-merges the fields present in `patch` over this record.
    pub fn apply_patch(&mut self, patch: CoursePatch) {
        let CoursePatch {
            title,
            description,
            instructor,
            category,
            level,
            price,
            original_price,
            rating,
            review_count,
            featured,
            duration,
            modules,
            thumbnail,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(instructor) = instructor {
            self.instructor = instructor;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(level) = level {
            self.level = level;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(original_price) = original_price {
            self.original_price = original_price;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(review_count) = review_count {
            self.review_count = review_count;
        }
        if let Some(featured) = featured {
            self.featured = featured;
        }
        if let Some(duration) = duration {
            self.duration = duration;
        }
        if let Some(modules) = modules {
            self.modules = modules;
        }
        if let Some(thumbnail) = thumbnail {
            self.thumbnail = thumbnail;
        }
    }

    /// The discount shown at checkout, if the course is marked down.
    pub fn savings(&self) -> Option<f64> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    /// Whether the list price is at least the current price. Not enforced by the store.
    pub fn has_consistent_pricing(&self) -> bool {
        self.original_price.map_or(true, |original| original >= self.price)
    }

    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }
}

/// The fields an admin supplies when creating a course.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub level: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub duration: String,
    pub modules: Vec<CourseModule>,
    pub thumbnail: Option<String>,
}

/// A partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
    /// `Some(None)` clears the original price.
    pub original_price: Option<Option<f64>>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub featured: Option<bool>,
    pub duration: Option<String>,
    pub modules: Option<Vec<CourseModule>>,
    /// `Some(None)` clears the thumbnail.
    pub thumbnail: Option<Option<String>>,
}

//=========================================================================================
// Enrollments
//=========================================================================================

/// Records that a user has access to a course.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub user_id: Uuid,
    pub course_id: CourseId,
    pub enrolled_at: DateTime<Utc>,
}

//=========================================================================================
// Filters
//=========================================================================================

/// An inclusive price window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.low <= price && price <= self.high
    }
}

/// The optional predicates a catalog query may apply. A missing field places
/// no constraint on that dimension, and so does an empty set or empty search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub search: Option<String>,
    pub categories: Option<BTreeSet<String>>,
    pub levels: Option<BTreeSet<String>>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<f64>,
}

impl FilterSpec {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels = Some(levels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_price_range(mut self, low: f64, high: f64) -> Self {
        self.price_range = Some(PriceRange::new(low, high));
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Layers `other` over `self`: every field `other` sets wins, every field it
    /// leaves out keeps the current value. Re-applying a sidebar selection this way
    /// keeps the search text the user already typed.
    pub fn merge(self, other: FilterSpec) -> FilterSpec {
        FilterSpec {
            search: other.search.or(self.search),
            categories: other.categories.or(self.categories),
            levels: other.levels.or(self.levels),
            price_range: other.price_range.or(self.price_range),
            min_rating: other.min_rating.or(self.min_rating),
        }
    }

    /// True when at least one clause would narrow a result.
    pub fn is_active(&self) -> bool {
        self.search_term().is_some()
            || self.categories.as_ref().is_some_and(|c| !c.is_empty())
            || self.levels.as_ref().is_some_and(|l| !l.is_empty())
            || self.price_range.is_some()
            || self.min_rating.is_some()
    }

    /// The search text, or `None` when it is absent or empty.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}
