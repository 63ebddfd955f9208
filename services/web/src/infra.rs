use job_seeker::config::AppConfig;
use job_seeker::error::AppError;
use job_seeker::render::Theme;
use job_seeker::workflows::apply::{
    ApplicantProfile, ApplicationSubmissionService, InMemorySubmissions, RemoteSubmissions,
};
use job_seeker::workflows::search::{InMemoryJobSearch, JobSearchService, RemoteJobSearch};
use job_seeker::workflows::session::{DemoSession, SingleFlight};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) session: Arc<Mutex<DemoSession>>,
    pub(crate) search: Arc<dyn JobSearchService>,
    pub(crate) submissions: Arc<dyn ApplicationSubmissionService>,
    pub(crate) search_flight: SingleFlight,
    pub(crate) submit_flight: SingleFlight,
    pub(crate) theme: Arc<Theme>,
    pub(crate) applicant: Arc<ApplicantProfile>,
}

impl AppState {
    pub(crate) fn new(
        metrics: PrometheusHandle,
        search: Arc<dyn JobSearchService>,
        submissions: Arc<dyn ApplicationSubmissionService>,
        theme: Theme,
    ) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            session: Arc::new(Mutex::new(DemoSession::new())),
            search,
            submissions,
            search_flight: SingleFlight::new(),
            submit_flight: SingleFlight::new(),
            theme: Arc::new(theme),
            applicant: Arc::new(ApplicantProfile::default()),
        }
    }

    /// Lock the shared session. Callers must drop the guard before awaiting.
    pub(crate) fn session(&self) -> MutexGuard<'_, DemoSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub(crate) fn search_service(config: &AppConfig) -> Result<Arc<dyn JobSearchService>, AppError> {
    match &config.backend.job_search_url {
        Some(url) => {
            info!(endpoint = %url, "using remote job search");
            Ok(Arc::new(RemoteJobSearch::new(
                url.clone(),
                config.backend.timeout,
            )?))
        }
        None => Ok(Arc::new(InMemoryJobSearch::with_sample_catalog(
            config.latency.search,
        )?)),
    }
}

pub(crate) fn submission_service(
    config: &AppConfig,
) -> Result<Arc<dyn ApplicationSubmissionService>, AppError> {
    match &config.backend.applications_url {
        Some(url) => {
            info!(endpoint = %url, "using remote application backend");
            Ok(Arc::new(RemoteSubmissions::new(
                url.clone(),
                config.backend.timeout,
            )?))
        }
        None => Ok(Arc::new(InMemorySubmissions::new(config.latency.submit))),
    }
}
