use crate::cli::ServeArgs;
use crate::infra::{search_service, submission_service, AppState};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use job_seeker::config::AppConfig;
use job_seeker::error::AppError;
use job_seeker::telemetry;
use std::sync::atomic::Ordering;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(
        prometheus_handle,
        search_service(&config)?,
        submission_service(&config)?,
        config.theme.clone(),
    );
    let readiness_flag = app_state.readiness.clone();

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job seeker demo ready");

    axum::serve(listener, app).await?;
    Ok(())
}
