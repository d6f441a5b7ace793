//! Career path catalog
//!
//! Fixed learning tracks and a planner that spreads a month budget across
//! a track's phases.

use serde::{Deserialize, Serialize};

/// A learning track
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CareerPath {
    pub id: &'static str,
    pub title: &'static str,
    pub phases: &'static [Phase],
}

/// One phase of a track
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Phase {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase placed on the calendar, months counted from 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedPhase {
    pub name: String,
    pub description: String,
    pub start_month: u32,
    pub end_month: u32,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPlan {
    pub title: String,
    pub total_months: u32,
    pub phases: Vec<PlannedPhase>,
}

const fn phase(name: &'static str, description: &'static str) -> Phase {
    Phase { name, description }
}

pub static CAREER_PATHS: &[CareerPath] = &[
    CareerPath {
        id: "data_scientist",
        title: "Data Scientist",
        phases: &[
            phase("Foundation", "Learn Python, statistics, and data analysis libraries (Pandas, NumPy)"),
            phase("Visualization & SQL", "Master data visualization (Matplotlib, Seaborn) and database querying"),
            phase("Machine Learning", "Study ML algorithms, scikit-learn, and model evaluation techniques"),
            phase("Deep Learning", "Learn neural networks, TensorFlow/PyTorch, and specialized architectures"),
            phase("Specialization", "Focus on NLP, computer vision, or time series analysis"),
            phase("Projects & Portfolio", "Build end-to-end projects showcasing your skills"),
        ],
    },
    CareerPath {
        id: "frontend_developer",
        title: "Frontend Developer",
        phases: &[
            phase("HTML/CSS Basics", "Learn semantic HTML and CSS fundamentals"),
            phase("JavaScript Essentials", "Master JavaScript core concepts and DOM manipulation"),
            phase("Responsive Design", "Learn Flexbox, Grid, and mobile-first development principles"),
            phase("Frontend Framework", "Choose and learn React, Vue, or Angular"),
            phase("State Management", "Understand state management patterns and tools"),
            phase("Performance & Deployment", "Study optimization techniques and deployment workflows"),
        ],
    },
    CareerPath {
        id: "backend_developer",
        title: "Backend Developer",
        phases: &[
            phase("Programming Language", "Master a backend language (Python, Node.js, Java, etc.)"),
            phase("Web Frameworks", "Learn frameworks like Flask, Express, Spring, etc."),
            phase("Databases", "Master SQL and NoSQL databases and ORM concepts"),
            phase("API Development", "Build RESTful and GraphQL APIs with authentication"),
            phase("Server Management", "Learn deployment, CI/CD, and basic DevOps principles"),
            phase("Security Best Practices", "Understand web security, data protection, and secure coding"),
        ],
    },
    CareerPath {
        id: "ml_engineer",
        title: "Machine Learning Engineer",
        phases: &[
            phase("Programming Skills", "Master Python and ML libraries (NumPy, Pandas, scikit-learn)"),
            phase("ML Fundamentals", "Learn algorithms, feature engineering, and model evaluation"),
            phase("Deep Learning", "Study neural networks with TensorFlow or PyTorch"),
            phase("Big Data Technologies", "Learn tools like Spark, Hadoop for large-scale ML"),
            phase("MLOps", "Master model deployment, monitoring, and maintenance"),
            phase("Advanced Topics", "Explore reinforcement learning, GANs, or other specialized areas"),
        ],
    },
    CareerPath {
        id: "devops_engineer",
        title: "DevOps Engineer",
        phases: &[
            phase("Fundamentals", "Learn Linux, networking, and cloud computing basics"),
            phase("Infrastructure as Code", "Master tools like Terraform, CloudFormation, or Pulumi"),
            phase("Containerization", "Learn Docker and container orchestration with Kubernetes"),
            phase("CI/CD Pipelines", "Build automation with Jenkins, GitHub Actions, or GitLab CI"),
            phase("Monitoring & Observability", "Implement monitoring using Prometheus, Grafana, ELK stack"),
            phase("Security & Compliance", "Apply DevSecOps principles and compliance automation"),
        ],
    },
];

/// Longest plan the HTTP surface accepts (50 years)
pub const MAX_PLAN_MONTHS: u32 = 600;

pub fn find(id: &str) -> Option<&'static CareerPath> {
    CAREER_PATHS.iter().find(|p| p.id == id)
}

/// Split `total_months` over `num_phases`; the remainder goes one month
/// at a time to the earliest phases
pub fn phase_durations(total_months: u32, num_phases: usize) -> Vec<u32> {
    if num_phases == 0 {
        return Vec::new();
    }
    let n = num_phases as u32;
    let base = total_months / n;
    let remainder = (total_months % n) as usize;

    (0..num_phases)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Lay a track's phases out consecutively from month 1.
///
/// Phases that receive zero months end the month before they start.
pub fn plan(id: &str, total_months: u32) -> Option<PathPlan> {
    let path = find(id)?;
    let durations = phase_durations(total_months, path.phases.len());

    let mut start_month: u32 = 1;
    let phases = path
        .phases
        .iter()
        .zip(durations)
        .map(|(phase, duration)| {
            let end_month = (start_month - 1).saturating_add(duration);
            let planned = PlannedPhase {
                name: phase.name.to_string(),
                description: phase.description.to_string(),
                start_month,
                end_month,
                duration,
            };
            start_month = end_month.saturating_add(1);
            planned
        })
        .collect();

    Some(PathPlan {
        title: path.title.to_string(),
        total_months,
        phases,
    })
}
