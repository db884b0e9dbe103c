//! services/api/src/adapters/seed.rs
//!
//! The demo catalog loaded into the in-memory store at startup.

use course_catalog_core::domain::{Course, CourseId, CourseModule};

const THUMBNAIL_QUERY: &str = "ixlib=rb-4.0.3&q=85&fm=jpg&crop=entropy&cs=srgb&w=500";

fn module(title: &str, lessons: [&str; 3]) -> CourseModule {
    CourseModule {
        title: title.to_string(),
        lessons: lessons.iter().map(|l| l.to_string()).collect(),
    }
}

fn thumbnail(photo: &str) -> Option<String> {
    Some(format!("https://images.unsplash.com/{photo}?{THUMBNAIL_QUERY}"))
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    description: &str,
    instructor: &str,
    (price, original_price): (f64, f64),
    photo: &str,
    (category, level): (&str, &str),
    (rating, review_count): (f64, u32),
    featured: bool,
    duration: &str,
    modules: Vec<CourseModule>,
) -> Course {
    Course {
        id: CourseId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        instructor: instructor.to_string(),
        category: category.to_string(),
        level: level.to_string(),
        price,
        original_price: Some(original_price),
        rating,
        review_count,
        featured,
        duration: duration.to_string(),
        modules,
        thumbnail: thumbnail(photo),
    }
}

/// Eight courses across six categories, three of them featured.
pub fn demo_catalog() -> Vec<Course> {
    vec![
        course(
            "1",
            "Complete Web Development Bootcamp",
            "Become a full-stack web developer with this comprehensive course covering HTML, CSS, JavaScript, React, Node.js, and more.",
            "Sarah Johnson",
            (89.99, 199.99),
            "photo-1605379399642-870262d3d051",
            ("Web Development", "Beginner"),
            (4.8, 2547),
            true,
            "52 hours",
            vec![
                module("Introduction to HTML & CSS", ["HTML Basics", "CSS Fundamentals", "Building Your First Webpage"]),
                module("JavaScript Essentials", ["JavaScript Syntax", "DOM Manipulation", "Event Handling"]),
                module("React Fundamentals", ["React Components", "State & Props", "Hooks"]),
                module("Backend with Node.js", ["Node.js Basics", "Express Framework", "RESTful APIs"]),
            ],
        ),
        course(
            "2",
            "Data Science and Machine Learning with Python",
            "Learn data science, data analysis, machine learning, and Python in this comprehensive course with real-world projects.",
            "David Chen",
            (94.99, 189.99),
            "photo-1551288049-bebda4e38f71",
            ("Data Science", "Intermediate"),
            (4.7, 1842),
            true,
            "48 hours",
            vec![
                module("Python for Data Science", ["Python Fundamentals", "NumPy & Pandas", "Data Visualization"]),
                module("Statistical Analysis", ["Descriptive Statistics", "Inferential Statistics", "Hypothesis Testing"]),
                module("Machine Learning Basics", ["Supervised Learning", "Unsupervised Learning", "Model Evaluation"]),
            ],
        ),
        course(
            "3",
            "Mobile App Development with React Native",
            "Create iOS and Android apps with React Native. Build a portfolio of real-world mobile applications.",
            "Michael Rodriguez",
            (79.99, 149.99),
            "photo-1512941937669-90a1b58e7e9c",
            ("Mobile Development", "Intermediate"),
            (4.6, 1253),
            false,
            "38 hours",
            vec![
                module("React Native Foundations", ["Setting Up Environment", "React Native Components", "Styling"]),
                module("Navigation and State Management", ["React Navigation", "State Management with Redux", "Context API"]),
                module("Building Real Apps", ["Social Media App", "E-commerce App", "Publishing to App Stores"]),
            ],
        ),
        course(
            "4",
            "Digital Marketing Masterclass",
            "Learn SEO, social media marketing, email campaigns, and PPC advertising strategies for business growth.",
            "Emma Williams",
            (59.99, 129.99),
            "photo-1460925895917-afdab827c52f",
            ("Marketing", "Beginner"),
            (4.5, 1876),
            false,
            "32 hours",
            vec![
                module("SEO Fundamentals", ["Keyword Research", "On-Page SEO", "Link Building"]),
                module("Social Media Marketing", ["Platform Strategy", "Content Creation", "Analytics"]),
                module("Email Marketing", ["Building Lists", "Campaign Design", "A/B Testing"]),
            ],
        ),
        course(
            "5",
            "UI/UX Design Essentials",
            "Master the principles of UI/UX design using Figma and build a professional portfolio of design projects.",
            "Alex Thompson",
            (69.99, 139.99),
            "photo-1561070791-2526d30994b5",
            ("Design", "Beginner"),
            (4.9, 2102),
            true,
            "40 hours",
            vec![
                module("Design Principles", ["Color Theory", "Typography", "Layout Design"]),
                module("User Experience Design", ["User Research", "Information Architecture", "Usability Testing"]),
                module("Figma Masterclass", ["Interface Design", "Prototyping", "Design Systems"]),
            ],
        ),
        course(
            "6",
            "Business Analytics and Intelligence",
            "Learn how to analyze business data, create reports, and make data-driven decisions for organizational growth.",
            "Robert Lewis",
            (84.99, 169.99),
            "photo-1507679799987-c73779587ccf",
            ("Business", "Advanced"),
            (4.6, 987),
            false,
            "45 hours",
            vec![
                module("Data Analysis Fundamentals", ["Business Metrics", "Excel for Analysis", "Data Visualization"]),
                module("Business Intelligence Tools", ["Power BI", "Tableau", "Google Analytics"]),
                module("Strategic Decision Making", ["Forecasting", "Risk Analysis", "ROI Calculation"]),
            ],
        ),
        course(
            "7",
            "Advanced JavaScript: From Fundamentals to Front-end Frameworks",
            "Dive deep into JavaScript from core concepts to building applications with modern frameworks like React, Vue, and Angular.",
            "Thomas Nguyen",
            (79.99, 159.99),
            "photo-1579468118864-1b9ea3c0db4a",
            ("Web Development", "Advanced"),
            (4.7, 1458),
            false,
            "56 hours",
            vec![
                module("JavaScript Deep Dive", ["Closures & Scope", "Prototypes & Inheritance", "Async JavaScript"]),
                module("Modern JavaScript", ["ES6+ Features", "Modules", "Tooling & Bundlers"]),
                module("Framework Comparison", ["React", "Vue", "Angular"]),
            ],
        ),
        course(
            "8",
            "Cloud Computing with AWS",
            "Master Amazon Web Services and learn to deploy scalable cloud applications and manage cloud infrastructure.",
            "Lisa Kumar",
            (99.99, 199.99),
            "photo-1535378620166-273708d44e4c",
            ("Web Development", "Advanced"),
            (4.8, 1096),
            false,
            "50 hours",
            vec![
                module("AWS Fundamentals", ["EC2", "S3", "RDS"]),
                module("Serverless Architecture", ["Lambda Functions", "API Gateway", "DynamoDB"]),
                module("DevOps on AWS", ["CI/CD Pipelines", "CloudFormation", "Monitoring & Logging"]),
            ],
        ),
    ]
}
