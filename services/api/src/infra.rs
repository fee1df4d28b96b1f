use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use jobdash::board::{
    ApplicationNotice, JobDraft, NotificationPublisher, NotifyError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Notification hook that writes each notice to the log stream, where the
/// mailer pipeline picks it up. Delivery is somebody else's job; this
/// publisher only emits the event.
#[derive(Default, Clone)]
pub(crate) struct LogNotificationPublisher;

impl NotificationPublisher for LogNotificationPublisher {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotifyError> {
        info!(
            job_id = %notice.job_id,
            applicant = %notice.applicant_name,
            contact = %notice.applicant_contact,
            "application notice emitted"
        );
        Ok(())
    }
}

/// The starter listings shipped with the demo command.
pub(crate) fn demo_jobs() -> Vec<JobDraft> {
    vec![
        JobDraft {
            title: "Move a couch".to_string(),
            city: "Portland, OR".to_string(),
            category: "Moving help".to_string(),
            pay: Some("60".to_string()),
            description:
                "Help move a couch from apartment to truck. 30-45 minutes. Two people job."
                    .to_string(),
            poster_contact: Some("poster@winwinjob.example".to_string()),
        },
        JobDraft {
            title: "Clean small studio".to_string(),
            city: "Vancouver, WA".to_string(),
            category: "Cleaning".to_string(),
            pay: Some("90".to_string()),
            description:
                "Deep clean a small studio (bathroom + kitchen). Cleaning supplies provided."
                    .to_string(),
            poster_contact: None,
        },
        JobDraft {
            title: "Yard work: rake leaves".to_string(),
            city: "Beaverton, OR".to_string(),
            category: "Yard work".to_string(),
            pay: Some("55".to_string()),
            description: "Rake leaves + bag them. 1-2 hours depending on speed.".to_string(),
            poster_contact: None,
        },
    ]
}
