use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{Application, ApplicationDraft, Job, JobDraft, JobId, JobQuery};
use super::intake::{self, ValidationError};
use super::repository::{
    ApplicationNotice, ApplicationRepository, JobRepository, NotificationPublisher,
    RepositoryError,
};

/// Store owning the job collection: validated creation plus filtered
/// retrieval. Constructed once per process and shared by reference.
pub struct JobStore<R> {
    repository: Arc<R>,
}

impl<R> JobStore<R>
where
    R: JobRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and persist a new posting. Repeated identical submissions
    /// create distinct jobs; there is no duplicate detection.
    pub fn create_job(&self, draft: JobDraft) -> Result<Job, JobStoreError> {
        let new = intake::new_job(draft, Utc::now())?;
        let job = self.repository.insert(new)?;
        info!(job_id = %job.id, category = %job.category, "job posted");
        Ok(job)
    }

    /// Look up one job. A missing id is data (`None`), not an error.
    pub fn get_job(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        self.repository.fetch(id)
    }

    /// Jobs matching the query, newest first. An unfiltered query returns
    /// the full collection in the same order.
    pub fn search_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, RepositoryError> {
        self.repository.search(query)
    }
}

/// Store owning the application collection. Holds the job store so a
/// submission can never reference a job that does not exist.
pub struct ApplicationStore<J, A, N> {
    jobs: Arc<JobStore<J>>,
    repository: Arc<A>,
    notifier: Arc<N>,
}

impl<J, A, N> ApplicationStore<J, A, N>
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(jobs: Arc<JobStore<J>>, repository: Arc<A>, notifier: Arc<N>) -> Self {
        Self {
            jobs,
            repository,
            notifier,
        }
    }

    /// Validate and persist an application against an existing job, then
    /// hand a notice to the notification hook. A failed notification is
    /// logged and swallowed; the stored application stands.
    pub fn create_application(
        &self,
        job_id: JobId,
        draft: ApplicationDraft,
    ) -> Result<Application, ApplicationStoreError> {
        let new = intake::new_application(job_id, draft, Utc::now())?;

        if self.jobs.get_job(job_id)?.is_none() {
            return Err(ApplicationStoreError::JobNotFound(job_id));
        }

        let application = self.repository.insert(new)?;
        info!(job_id = %job_id, application_id = %application.id, "application received");

        let notice = ApplicationNotice {
            job_id,
            applicant_name: application.applicant_name.clone(),
            applicant_contact: application.applicant_contact.clone(),
            message: application.message.clone(),
        };
        if let Err(err) = self.notifier.publish(notice) {
            warn!(job_id = %job_id, error = %err, "application notification dropped");
        }

        Ok(application)
    }

    /// Applications for the job, newest first. Unknown job ids yield an
    /// empty list, indistinguishable from a job nobody applied to.
    pub fn list_applications_for_job(
        &self,
        job_id: JobId,
    ) -> Result<Vec<Application>, RepositoryError> {
        self.repository.list_for_job(job_id)
    }
}

/// Error raised by the job store.
#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Error raised by the application store.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationStoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("job {0} does not exist")]
    JobNotFound(JobId),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
