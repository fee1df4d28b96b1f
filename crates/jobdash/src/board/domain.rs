use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a posted job by its repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned to a submitted application by its repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub i64);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Built-in listing categories. Posted jobs may carry categories outside this
/// list; it only seeds the browse/post forms.
pub const CATEGORIES: &[&str] = &[
    "Cleaning",
    "Moving help",
    "Yard work",
    "Delivery",
    "Handyman",
    "Babysitting",
];

/// A published job posting. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub city: String,
    pub category: String,
    /// Free text; numeric-looking submissions are stored with currency
    /// symbols stripped.
    pub pay: Option<String>,
    pub description: String,
    pub poster_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A candidate's response to one job. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_name: String,
    pub applicant_contact: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Raw job submission as it arrives from a form or JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub city: String,
    pub category: String,
    #[serde(default)]
    pub pay: Option<String>,
    pub description: String,
    #[serde(default)]
    pub poster_contact: Option<String>,
}

/// Raw application submission; the target job id comes from the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub applicant_name: String,
    pub applicant_contact: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated job record awaiting an id from its repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub city: String,
    pub category: String,
    pub pay: Option<String>,
    pub description: String,
    pub poster_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated application record awaiting an id from its repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_id: JobId,
    pub applicant_name: String,
    pub applicant_contact: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Search criteria for job listings. Predicates are optional and combine
/// with logical AND; construction normalizes the raw form input so matching
/// never has to re-trim or re-case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    keyword: Option<String>,
    city: Option<String>,
    category: Option<String>,
}

impl JobQuery {
    /// Build a query from raw form values. Keyword and city are lowercased
    /// for case-insensitive substring matching; a blank or "All" category
    /// disables the category predicate entirely.
    pub fn new(keyword: Option<String>, city: Option<String>, category: Option<String>) -> Self {
        let keyword = keyword
            .map(|value| value.trim().to_lowercase())
            .filter(|value| !value.is_empty());
        let city = city
            .map(|value| value.trim().to_lowercase())
            .filter(|value| !value.is_empty());
        let category = category
            .map(|value| value.trim().to_string())
            .filter(|value| !is_category_wildcard(value));

        Self {
            keyword,
            city,
            category,
        }
    }

    pub fn unfiltered() -> Self {
        Self::default()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.keyword.is_none() && self.city.is_none() && self.category.is_none()
    }

    /// True when the job satisfies every active predicate.
    ///
    /// Keyword matches title, description, or category case-insensitively;
    /// city is a case-insensitive substring; category is an exact,
    /// case-sensitive comparison.
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(needle) = &self.keyword {
            let hit = job.title.to_lowercase().contains(needle.as_str())
                || job.description.to_lowercase().contains(needle.as_str())
                || job.category.to_lowercase().contains(needle.as_str());
            if !hit {
                return false;
            }
        }

        if let Some(city) = &self.city {
            if !job.city.to_lowercase().contains(city.as_str()) {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if job.category != *category {
                return false;
            }
        }

        true
    }
}

/// Sentinel category values that mean "do not filter by category".
fn is_category_wildcard(value: &str) -> bool {
    value.is_empty()
        || value.eq_ignore_ascii_case("all")
        || value.eq_ignore_ascii_case("all categories")
}

/// Listing order for jobs: newest first, same-instant postings falling back
/// to descending id so insertion order still wins.
pub fn newest_first(a: &Job, b: &Job) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.0.cmp(&a.id.0))
}
