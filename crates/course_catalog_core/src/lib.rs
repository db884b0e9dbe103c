pub mod domain;
pub mod ports;
pub mod query;

pub use domain::{
    Course, CourseId, CourseModule, CoursePatch, Enrollment, FilterSpec, NewCourse, PriceRange,
};
pub use ports::{
    CatalogOperation, CatalogService, EnrollmentService, LatencyPolicy, PortError, PortResult,
};
