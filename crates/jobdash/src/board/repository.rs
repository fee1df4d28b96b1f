use serde::{Deserialize, Serialize};

use super::domain::{Application, Job, JobId, JobQuery, NewApplication, NewJob};

/// Storage abstraction for job postings. Implementations assign the id;
/// every operation is a single atomic statement against the backend.
pub trait JobRepository: Send + Sync {
    fn insert(&self, new: NewJob) -> Result<Job, RepositoryError>;
    fn fetch(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;
    /// Jobs satisfying the query, newest first.
    fn search(&self, query: &JobQuery) -> Result<Vec<Job>, RepositoryError>;
}

/// Storage abstraction for applications. Rows are subordinate to one job and
/// only ever read back through that job's id.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, new: NewApplication) -> Result<Application, RepositoryError>;
    /// Applications for the job, newest first; empty for unknown job ids.
    fn list_for_job(&self, job_id: JobId) -> Result<Vec<Application>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("constraint violated: {0}")]
    Constraint(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing the outbound hook fired after an application is stored
/// (e.g. an e-mail adapter). Delivery failures never undo the write.
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotifyError>;
}

/// Event payload handed to the notification layer on a stored application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationNotice {
    pub job_id: JobId,
    pub applicant_name: String,
    pub applicant_contact: String,
    pub message: String,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
