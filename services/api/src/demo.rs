use std::sync::{Arc, Mutex};

use clap::Args;
use jobdash::board::{
    ApplicationDraft, ApplicationNotice, ApplicationStore, InMemoryApplicationRepository,
    InMemoryJobRepository, JobQuery, JobStore, NotificationPublisher, NotifyError,
};
use jobdash::error::AppError;

use crate::infra::demo_jobs;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Keyword filter applied to the demo search
    #[arg(long)]
    pub(crate) q: Option<String>,
    /// City filter applied to the demo search
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Category filter applied to the demo search ("All" disables it)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Skip the application intake portion of the demo
    #[arg(long)]
    pub(crate) skip_application: bool,
}

/// Notifier double for the console demo; notices are rendered at the end
/// instead of being handed to a mailer.
#[derive(Default, Clone)]
struct CapturedNotices {
    events: Arc<Mutex<Vec<ApplicationNotice>>>,
}

impl CapturedNotices {
    fn events(&self) -> Vec<ApplicationNotice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}

impl NotificationPublisher for CapturedNotices {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        q,
        city,
        category,
        skip_application,
    } = args;

    let jobs = Arc::new(JobStore::new(Arc::new(InMemoryJobRepository::default())));
    let notices = Arc::new(CapturedNotices::default());
    let applications = ApplicationStore::new(
        jobs.clone(),
        Arc::new(InMemoryApplicationRepository::default()),
        notices.clone(),
    );

    println!("Job board demo");
    for draft in demo_jobs() {
        match jobs.create_job(draft) {
            Ok(job) => println!("- Seeded job {}: {} ({})", job.id, job.title, job.city),
            Err(err) => println!("- Seed rejected: {}", err),
        }
    }

    let query = JobQuery::new(q, city, category);
    let hits = match jobs.search_jobs(&query) {
        Ok(hits) => hits,
        Err(err) => {
            println!("Search unavailable: {}", err);
            return Ok(());
        }
    };

    if query.is_unfiltered() {
        println!("\nAll listings (newest first)");
    } else {
        println!("\nMatching listings (newest first)");
    }
    if hits.is_empty() {
        println!("- none");
        return Ok(());
    }
    for job in &hits {
        let pay = job.pay.as_deref().unwrap_or("n/a");
        println!(
            "- #{} {} | {} | {} | pay {}",
            job.id, job.title, job.city, job.category, pay
        );
    }

    if skip_application {
        return Ok(());
    }

    println!("\nApplication intake demo");
    let target = &hits[0];
    let draft = ApplicationDraft {
        applicant_name: "Jane Doe".to_string(),
        applicant_contact: "jane@example.com".to_string(),
        message: Some("I can help this weekend.".to_string()),
    };

    let stored = match applications.create_application(target.id, draft) {
        Ok(stored) => stored,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Stored application {} for job #{} from {}",
        stored.id, stored.job_id, stored.applicant_name
    );

    match applications.list_applications_for_job(target.id) {
        Ok(listed) => match serde_json::to_string_pretty(&listed) {
            Ok(json) => println!("  Applications on record:\n{}", json),
            Err(err) => println!("  Applications on record unavailable: {}", err),
        },
        Err(err) => println!("  Repository unavailable: {}", err),
    }

    let events = notices.events();
    if events.is_empty() {
        println!("  Notifications: none emitted");
    } else {
        println!("  Notifications:");
        for notice in events {
            println!(
                "    - job #{} <- {} ({})",
                notice.job_id, notice.applicant_name, notice.applicant_contact
            );
        }
    }

    Ok(())
}
