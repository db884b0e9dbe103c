//! crates/course_catalog_core/src/query.rs
//!
//! The catalog query engine. Filtering is pure and stable: the result is always
//! a subsequence of the input in its original order, with every clause of the
//! `FilterSpec` combined by logical AND.

use crate::domain::{Course, FilterSpec};

impl FilterSpec {
    /// Evaluates every clause against a single course.
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(term) = self.search_term() {
            let term = term.to_lowercase();
            let hit = contains_folded(&course.title, &term)
                || contains_folded(&course.description, &term)
                || contains_folded(&course.instructor, &term);
            if !hit {
                return false;
            }
        }

        if let Some(categories) = self.categories.as_ref().filter(|c| !c.is_empty()) {
            if !categories.contains(&course.category) {
                return false;
            }
        }

        if let Some(levels) = self.levels.as_ref().filter(|l| !l.is_empty()) {
            if !levels.contains(&course.level) {
                return false;
            }
        }

        if let Some(range) = self.price_range {
            if !range.contains(course.price) {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if course.rating < min_rating {
                return false;
            }
        }

        true
    }
}

/// Returns the courses that satisfy `filter`, preserving input order.
pub fn apply(courses: &[Course], filter: &FilterSpec) -> Vec<Course> {
    courses
        .iter()
        .filter(|course| filter.matches(course))
        .cloned()
        .collect()
}

/// Quick search used by the header search box. Unlike `apply`, it only looks at
/// the title and description.
pub fn search_title_description(courses: &[Course], query: &str) -> Vec<Course> {
    let term = query.to_lowercase();
    courses
        .iter()
        .filter(|course| {
            contains_folded(&course.title, &term) || contains_folded(&course.description, &term)
        })
        .cloned()
        .collect()
}

/// `needle` must already be lowercase.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseId, CourseModule};

    fn course(id: &str, category: &str, level: &str, price: f64, rating: f64) -> Course {
        Course {
            id: CourseId::from(id),
            title: format!("Course {id}"),
            description: format!("A {category} course"),
            instructor: "Jane Doe".to_string(),
            category: category.to_string(),
            level: level.to_string(),
            price,
            original_price: None,
            rating,
            review_count: 0,
            featured: false,
            duration: "10 hours".to_string(),
            modules: vec![CourseModule {
                title: "Intro".to_string(),
                lessons: vec!["Welcome".to_string()],
            }],
            thumbnail: None,
        }
    }

    fn sample() -> Vec<Course> {
        vec![
            course("1", "Web Development", "Beginner", 89.99, 4.8),
            course("2", "Data Science", "Intermediate", 94.99, 4.7),
            course("3", "Web Development", "Advanced", 79.99, 4.6),
            course("4", "Design", "Beginner", 59.99, 4.9),
            course("5", "Business", "Advanced", 150.0, 3.2),
        ]
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let courses = sample();
        assert_eq!(apply(&courses, &FilterSpec::default()), courses);
    }

    #[test]
    fn empty_sets_and_search_place_no_constraint() {
        let courses = sample();
        let filter = FilterSpec::default()
            .with_search("")
            .with_categories(Vec::<String>::new())
            .with_levels(Vec::<String>::new());
        assert_eq!(apply(&courses, &filter), courses);
    }

    #[test]
    fn result_preserves_input_order() {
        let courses = sample();
        let filter = FilterSpec::default().with_levels(["Advanced", "Beginner"]);
        assert_eq!(ids(&apply(&courses, &filter)), vec!["1", "3", "4", "5"]);
    }

    #[test]
    fn search_is_case_insensitive_across_title_description_and_instructor() {
        let mut courses = sample();
        courses[2].instructor = "Michael Rodriguez".to_string();

        let by_title = FilterSpec::default().with_search("COURSE 2");
        assert_eq!(ids(&apply(&courses, &by_title)), vec!["2"]);

        let by_description = FilterSpec::default().with_search("design course");
        assert_eq!(ids(&apply(&courses, &by_description)), vec!["4"]);

        let by_instructor = FilterSpec::default().with_search("rodriguez");
        assert_eq!(ids(&apply(&courses, &by_instructor)), vec!["3"]);
    }

    #[test]
    fn clauses_combine_conjunctively() {
        let courses = sample();
        let categories = FilterSpec::default().with_categories(["Web Development", "Business"]);
        let levels = FilterSpec::default().with_levels(["Advanced"]);
        let both = categories.clone().merge(levels.clone());

        let by_category = apply(&courses, &categories);
        let by_level = apply(&courses, &levels);
        let intersection: Vec<Course> = by_category
            .iter()
            .filter(|c| by_level.iter().any(|l| l.id == c.id))
            .cloned()
            .collect();

        assert_eq!(apply(&courses, &both), intersection);
        assert_eq!(ids(&intersection), vec!["3", "5"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let courses = sample();
        let filter = FilterSpec::default()
            .with_search("course")
            .with_price_range(60.0, 100.0)
            .with_min_rating(4.0);
        let once = apply(&courses, &filter);
        assert_eq!(apply(&once, &filter), once);
    }

    #[test]
    fn degenerate_price_range_matches_exact_price() {
        let courses = sample();
        let filter = FilterSpec::default().with_price_range(79.99, 79.99);
        assert_eq!(ids(&apply(&courses, &filter)), vec!["3"]);
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let courses = vec![
            course("A", "X", "Beginner", 50.0, 4.0),
            course("B", "Y", "Beginner", 150.0, 4.0),
        ];
        let filter = FilterSpec::default().with_price_range(0.0, 100.0);
        assert_eq!(ids(&apply(&courses, &filter)), vec!["A"]);

        let upper = FilterSpec::default().with_price_range(50.0, 150.0);
        assert_eq!(ids(&apply(&courses, &upper)), vec!["A", "B"]);
    }

    #[test]
    fn impossible_price_range_yields_empty_result() {
        let courses = sample();
        let filter = FilterSpec::default().with_price_range(100.0, 10.0);
        assert!(apply(&courses, &filter).is_empty());
    }

    #[test]
    fn min_rating_is_inclusive() {
        let courses = sample();
        let filter = FilterSpec::default().with_min_rating(4.8);
        assert_eq!(ids(&apply(&courses, &filter)), vec!["1", "4"]);
    }

    #[test]
    fn quick_search_ignores_instructor() {
        let courses = sample();
        assert!(search_title_description(&courses, "jane").is_empty());
        assert_eq!(ids(&search_title_description(&courses, "DATA SCIENCE")), vec!["2"]);
        assert_eq!(search_title_description(&courses, "").len(), courses.len());
    }

    #[test]
    fn merge_keeps_search_when_sidebar_omits_it() {
        let current = FilterSpec::default().with_search("react");
        let sidebar = FilterSpec::default()
            .with_price_range(0.0, 200.0)
            .with_levels(["Beginner"]);

        let merged = current.merge(sidebar);
        assert_eq!(merged.search.as_deref(), Some("react"));
        assert_eq!(merged.price_range.map(|r| (r.low, r.high)), Some((0.0, 200.0)));
        assert!(merged.categories.is_none());
    }

    #[test]
    fn merge_prefers_incoming_fields() {
        let current = FilterSpec::default()
            .with_categories(["Design"])
            .with_min_rating(2.0);
        let incoming = FilterSpec::default().with_categories(["Business"]);

        let merged = current.merge(incoming);
        assert_eq!(
            merged.categories.map(|c| c.into_iter().collect::<Vec<_>>()),
            Some(vec!["Business".to_string()])
        );
        assert_eq!(merged.min_rating, Some(2.0));
    }

    #[test]
    fn activity_ignores_empty_clauses() {
        assert!(!FilterSpec::default().is_active());
        assert!(!FilterSpec::default()
            .with_search("")
            .with_categories(Vec::<String>::new())
            .is_active());
        assert!(FilterSpec::default().with_min_rating(1.0).is_active());
        assert!(FilterSpec::default().with_levels(["Advanced"]).is_active());
    }
}
