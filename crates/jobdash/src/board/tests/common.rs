use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::board::domain::{
    Application, ApplicationDraft, Job, JobDraft, JobId, JobQuery, NewApplication, NewJob,
};
use crate::board::memory::{InMemoryApplicationRepository, InMemoryJobRepository};
use crate::board::repository::{
    ApplicationNotice, ApplicationRepository, JobRepository, NotificationPublisher, NotifyError,
    RepositoryError,
};
use crate::board::router::{board_router, BoardState};
use crate::board::service::{ApplicationStore, JobStore};

pub(super) fn job_draft() -> JobDraft {
    JobDraft {
        title: "Move a couch".to_string(),
        city: "Portland, OR".to_string(),
        category: "Moving help".to_string(),
        pay: Some("60".to_string()),
        description: "Help move a couch from apartment to truck.".to_string(),
        poster_contact: Some("poster@example.com".to_string()),
    }
}

pub(super) fn application_draft() -> ApplicationDraft {
    ApplicationDraft {
        applicant_name: "Jane Doe".to_string(),
        applicant_contact: "jane@example.com".to_string(),
        message: Some("I can help".to_string()),
    }
}

pub(super) fn timestamp(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn posting_at(
    title: &str,
    city: &str,
    category: &str,
    description: &str,
    created_at: DateTime<Utc>,
) -> NewJob {
    NewJob {
        title: title.to_string(),
        city: city.to_string(),
        category: category.to_string(),
        pay: Some("50".to_string()),
        description: description.to_string(),
        poster_contact: None,
        created_at,
    }
}

pub(super) type TestJobStore = JobStore<InMemoryJobRepository>;
pub(super) type TestApplicationStore =
    ApplicationStore<InMemoryJobRepository, InMemoryApplicationRepository, RecordingNotifier>;

pub(super) fn build_stores() -> (
    Arc<TestJobStore>,
    Arc<TestApplicationStore>,
    Arc<RecordingNotifier>,
) {
    let job_repository = Arc::new(InMemoryJobRepository::default());
    let application_repository = Arc::new(InMemoryApplicationRepository::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let jobs = Arc::new(JobStore::new(job_repository));
    let applications = Arc::new(ApplicationStore::new(
        jobs.clone(),
        application_repository,
        notifier.clone(),
    ));

    (jobs, applications, notifier)
}

pub(super) fn board_state() -> BoardState<
    InMemoryJobRepository,
    InMemoryApplicationRepository,
    RecordingNotifier,
> {
    let (jobs, applications, _) = build_stores();
    BoardState { jobs, applications }
}

pub(super) fn test_router() -> axum::Router {
    board_router(board_state())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Notification double capturing every published notice.
#[derive(Default, Clone)]
pub(super) struct RecordingNotifier {
    notices: Arc<Mutex<Vec<ApplicationNotice>>>,
}

impl RecordingNotifier {
    pub(super) fn notices(&self) -> Vec<ApplicationNotice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}

impl NotificationPublisher for RecordingNotifier {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotifyError> {
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

/// Notification double whose transport always fails.
pub(super) struct FailingNotifier;

impl NotificationPublisher for FailingNotifier {
    fn publish(&self, _notice: ApplicationNotice) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp relay offline".to_string()))
    }
}

/// Job backend that is permanently offline.
pub(super) struct UnavailableJobRepository;

impl JobRepository for UnavailableJobRepository {
    fn insert(&self, _new: NewJob) -> Result<Job, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: JobId) -> Result<Option<Job>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn search(&self, _query: &JobQuery) -> Result<Vec<Job>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Application backend that is permanently offline.
pub(super) struct UnavailableApplicationRepository;

impl ApplicationRepository for UnavailableApplicationRepository {
    fn insert(&self, _new: NewApplication) -> Result<Application, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_for_job(&self, _job_id: JobId) -> Result<Vec<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
