use crate::cli::ServeArgs;
use crate::infra::{AppState, LogNotificationPublisher};
use crate::routes::with_board_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use jobdash::board::{
    ApplicationStore, BoardState, InMemoryApplicationRepository, InMemoryJobRepository, JobStore,
};
use jobdash::config::AppConfig;
use jobdash::error::AppError;
use jobdash::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let jobs = Arc::new(JobStore::new(Arc::new(InMemoryJobRepository::default())));
    let applications = Arc::new(ApplicationStore::new(
        jobs.clone(),
        Arc::new(InMemoryApplicationRepository::default()),
        Arc::new(LogNotificationPublisher),
    ));
    let board_state = BoardState { jobs, applications };

    let app = with_board_routes(board_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job board service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
