use crate::infra::AppState;
use crate::pages;
use axum::extract::{Extension, Form, Path};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use job_seeker::error::AppError;
use job_seeker::workflows::search::{interpret, JobId, Submission};
use job_seeker::workflows::session::{DetailView, SessionSnapshot};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
pub(crate) struct SearchForm {
    #[serde(default)]
    pub(crate) goal: String,
    #[serde(default)]
    pub(crate) payload: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoalForm {
    #[serde(default)]
    pub(crate) goal: String,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", post(search))
        .route("/goal", post(edit_goal))
        .route("/reset", post(reset))
        .route("/jobs/:job_id/select", post(select_job))
        .route("/views/:view", post(show_view))
        .route("/apply/open", post(open_wizard))
        .route("/apply/next", post(wizard_next))
        .route("/apply/back", post(wizard_back))
        .route("/apply/submit", post(wizard_submit))
        .route("/apply/close", post(close_wizard))
        .route("/history", get(history))
        .route("/api/v1/session", get(session_snapshot))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state))
}

fn back_to_page() -> Redirect {
    Redirect::to("/")
}

fn snapshot(state: &AppState) -> SessionSnapshot {
    state.session().snapshot(&state.applicant)
}

pub(crate) async fn index(Extension(state): Extension<AppState>) -> Html<String> {
    let snapshot = snapshot(&state);
    Html(pages::index_page(
        &state.theme,
        &snapshot,
        state.search_flight.is_busy(),
    ))
}

pub(crate) async fn search(
    Extension(state): Extension<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Redirect, AppError> {
    run_search(
        &state,
        Submission {
            goal: form.goal,
            payload: form.payload,
        },
    )
    .await
}

pub(crate) async fn edit_goal(
    Extension(state): Extension<AppState>,
    Form(form): Form<GoalForm>,
) -> Result<Redirect, AppError> {
    run_search(&state, Submission::goal(form.goal)).await
}

async fn run_search(state: &AppState, submission: Submission) -> Result<Redirect, AppError> {
    let _flight = state
        .search_flight
        .try_begin()
        .ok_or(AppError::SearchInFlight)?;

    let query = match interpret(&submission) {
        Ok(query) => query,
        Err(err) => {
            state.session().reject_input(submission, &err);
            return Ok(back_to_page());
        }
    };

    match state.search.search(query).await {
        Ok(results) => {
            state.session().apply_result_set(results);
            Ok(back_to_page())
        }
        Err(err) => {
            warn!(error = %err, "job search failed");
            state.session().set_notice(err.to_string());
            Err(err.into())
        }
    }
}

pub(crate) async fn reset(Extension(state): Extension<AppState>) -> Result<Redirect, AppError> {
    if state.search_flight.is_busy() {
        return Err(AppError::SearchInFlight);
    }
    state.session().reset();
    Ok(back_to_page())
}

pub(crate) async fn select_job(
    Extension(state): Extension<AppState>,
    Path(job_id): Path<String>,
) -> Redirect {
    let job_id = JobId::new(job_id);
    if !state.session().select(&job_id) {
        debug!(%job_id, "ignoring selection of unknown job");
    }
    back_to_page()
}

pub(crate) async fn show_view(
    Extension(state): Extension<AppState>,
    Path(view): Path<String>,
) -> Result<Redirect, AppError> {
    let view: DetailView = view.parse()?;
    state.session().show_view(view);
    Ok(back_to_page())
}

pub(crate) async fn open_wizard(
    Extension(state): Extension<AppState>,
) -> Result<Redirect, AppError> {
    state.session().open_wizard()?;
    Ok(back_to_page())
}

pub(crate) async fn wizard_next(
    Extension(state): Extension<AppState>,
) -> Result<Redirect, AppError> {
    state.session().wizard_advance()?;
    Ok(back_to_page())
}

pub(crate) async fn wizard_back(
    Extension(state): Extension<AppState>,
) -> Result<Redirect, AppError> {
    state.session().wizard_retreat()?;
    Ok(back_to_page())
}

pub(crate) async fn close_wizard(Extension(state): Extension<AppState>) -> Redirect {
    state.session().close_wizard();
    back_to_page()
}

pub(crate) async fn wizard_submit(
    Extension(state): Extension<AppState>,
) -> Result<Redirect, AppError> {
    let _flight = state
        .submit_flight
        .try_begin()
        .ok_or(AppError::SubmissionInFlight)?;

    let packet = state.session().wizard_begin_submit(&state.applicant)?;
    let job_id = packet.job_id.clone();

    match state.submissions.submit(packet).await {
        Ok(receipt) => {
            info!(%job_id, confirmation = %receipt.confirmation_id, "application submitted");
            state.session().wizard_complete_submit(&job_id, receipt);
            Ok(back_to_page())
        }
        Err(err) => {
            warn!(%job_id, error = %err, "application submission failed");
            state.session().wizard_fail_submit(&job_id, err.to_string());
            Err(err.into())
        }
    }
}

pub(crate) async fn history(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, AppError> {
    let receipts = state.submissions.history().await?;
    Ok(Html(pages::history_page(&state.theme, &receipts)))
}

pub(crate) async fn session_snapshot(
    Extension(state): Extension<AppState>,
) -> Json<SessionSnapshot> {
    Json(snapshot(&state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
