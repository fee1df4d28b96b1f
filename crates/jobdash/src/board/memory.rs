use std::sync::{Arc, Mutex};

use super::domain::{
    self, Application, ApplicationId, Job, JobId, JobQuery, NewApplication, NewJob,
};
use super::repository::{ApplicationRepository, JobRepository, RepositoryError};

/// In-memory job table. Clones share the same table, mirroring how a pooled
/// database handle would behave.
#[derive(Default, Clone)]
pub struct InMemoryJobRepository {
    state: Arc<Mutex<JobTable>>,
}

#[derive(Default)]
struct JobTable {
    rows: Vec<Job>,
    next_id: i64,
}

impl JobRepository for InMemoryJobRepository {
    fn insert(&self, new: NewJob) -> Result<Job, RepositoryError> {
        let mut table = self.state.lock().expect("job table mutex poisoned");
        table.next_id += 1;
        let job = Job {
            id: JobId(table.next_id),
            title: new.title,
            city: new.city,
            category: new.category,
            pay: new.pay,
            description: new.description,
            poster_contact: new.poster_contact,
            created_at: new.created_at,
        };
        table.rows.push(job.clone());
        Ok(job)
    }

    fn fetch(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        let table = self.state.lock().expect("job table mutex poisoned");
        Ok(table.rows.iter().find(|job| job.id == id).cloned())
    }

    fn search(&self, query: &JobQuery) -> Result<Vec<Job>, RepositoryError> {
        let table = self.state.lock().expect("job table mutex poisoned");
        let mut hits: Vec<Job> = table
            .rows
            .iter()
            .filter(|job| query.matches(job))
            .cloned()
            .collect();
        hits.sort_by(domain::newest_first);
        Ok(hits)
    }
}

/// In-memory application table.
#[derive(Default, Clone)]
pub struct InMemoryApplicationRepository {
    state: Arc<Mutex<ApplicationTable>>,
}

#[derive(Default)]
struct ApplicationTable {
    rows: Vec<Application>,
    next_id: i64,
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, new: NewApplication) -> Result<Application, RepositoryError> {
        let mut table = self.state.lock().expect("application table mutex poisoned");
        table.next_id += 1;
        let application = Application {
            id: ApplicationId(table.next_id),
            job_id: new.job_id,
            applicant_name: new.applicant_name,
            applicant_contact: new.applicant_contact,
            message: new.message,
            created_at: new.created_at,
        };
        table.rows.push(application.clone());
        Ok(application)
    }

    fn list_for_job(&self, job_id: JobId) -> Result<Vec<Application>, RepositoryError> {
        let table = self.state.lock().expect("application table mutex poisoned");
        let mut hits: Vec<Application> = table
            .rows
            .iter()
            .filter(|application| application.job_id == job_id)
            .cloned()
            .collect();
        hits.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        Ok(hits)
    }
}
