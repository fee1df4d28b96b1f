//! Job board core: posting intake, filtered search, and application tracking.
//!
//! The stores in this module are framework-free; persistence and outbound
//! notification sit behind the traits in [`repository`], so the service layer
//! can run against the in-memory backends here or any table-shaped store.

pub mod domain;
pub mod intake;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationDraft, ApplicationId, Job, JobDraft, JobId, JobQuery, NewApplication,
    NewJob, CATEGORIES,
};
pub use intake::ValidationError;
pub use memory::{InMemoryApplicationRepository, InMemoryJobRepository};
pub use repository::{
    ApplicationNotice, ApplicationRepository, JobRepository, NotificationPublisher, NotifyError,
    RepositoryError,
};
pub use router::{board_router, BoardState};
pub use service::{ApplicationStore, ApplicationStoreError, JobStore, JobStoreError};
