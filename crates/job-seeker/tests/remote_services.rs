use std::time::Duration;

use job_seeker::workflows::apply::{
    ApplicantProfile, ApplicationPacket, ApplicationStatus, ApplicationSubmissionService,
    RemoteSubmissions, SubmissionError,
};
use job_seeker::workflows::search::{
    sample_result_set, JobSearchService, PayloadError, RemoteJobSearch, SearchError, SearchQuery,
    SAMPLE_PAYLOAD,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

fn packet() -> ApplicationPacket {
    let set = sample_result_set().expect("sample parses");
    ApplicationPacket::assemble(&set.entries()[0], &ApplicantProfile::default())
}

#[tokio::test]
async fn remote_search_posts_goal_and_validates_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs"))
        .and(body_json(json!({ "goal": "Remote React Developer position" })))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_PAYLOAD))
        .expect(1)
        .mount(&server)
        .await;

    let search =
        RemoteJobSearch::new(format!("{}/jobs", server.uri()), TIMEOUT).expect("client builds");
    let results = search
        .search(SearchQuery::Goal("Remote React Developer position".to_string()))
        .await
        .expect("search succeeds");

    assert_eq!(results.goal(), "Remote React Developer position");
    assert_eq!(results.len(), 3);
    assert_eq!(results.entries()[1].posting.company_name, "GitHub");
}

#[tokio::test]
async fn remote_search_returns_pasted_sets_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let search = RemoteJobSearch::new(server.uri(), TIMEOUT).expect("client builds");
    let pasted = sample_result_set().expect("sample parses").with_goal("pasted");
    let results = search
        .search(SearchQuery::Pasted(pasted.clone()))
        .await
        .expect("search succeeds");
    assert_eq!(results, pasted);
}

#[tokio::test]
async fn remote_search_reports_backend_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let search = RemoteJobSearch::new(server.uri(), TIMEOUT).expect("client builds");
    match search.search(SearchQuery::Goal("anything".to_string())).await {
        Err(SearchError::Status { status }) => assert_eq!(status, 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn remote_search_rejects_documents_that_fail_validation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobs": "none" })))
        .mount(&server)
        .await;

    let search = RemoteJobSearch::new(server.uri(), TIMEOUT).expect("client builds");
    match search.search(SearchQuery::Goal("anything".to_string())).await {
        Err(SearchError::InvalidResponse(PayloadError::Schema { .. })) => {}
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[tokio::test]
async fn remote_search_reports_unreachable_backend() {
    let search = RemoteJobSearch::new("http://127.0.0.1:9/jobs", Duration::from_millis(500))
        .expect("client builds");
    assert!(matches!(
        search.search(SearchQuery::Goal("anything".to_string())).await,
        Err(SearchError::Transport(_))
    ));
}

#[tokio::test]
async fn remote_submissions_post_packet_and_read_receipt() {
    let server = MockServer::start().await;
    let packet = packet();
    Mock::given(method("POST"))
        .and(path("/applications"))
        .and(body_json(&packet))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "confirmation_id": "remote-17",
            "job_id": "4128046946",
            "job_title": "Frontend Engineer, UI Components and Patterns",
            "company_name": "Stripe",
            "submitted_at": "2025-03-15T09:30:00Z",
            "status": "applied"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let submissions = RemoteSubmissions::new(format!("{}/applications", server.uri()), TIMEOUT)
        .expect("client builds");
    let receipt = submissions.submit(packet).await.expect("submission accepted");

    assert_eq!(receipt.confirmation_id, "remote-17");
    assert_eq!(receipt.status, ApplicationStatus::Applied);
    assert_eq!(receipt.job_id.as_str(), "4128046946");
}

#[tokio::test]
async fn remote_history_is_read_from_the_same_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "confirmation_id": "remote-18",
                "job_id": "4130211873",
                "job_title": "Senior Frontend Engineer",
                "company_name": "GitHub",
                "submitted_at": "2025-03-16T10:00:00Z",
                "status": "viewed"
            }
        ])))
        .mount(&server)
        .await;

    let submissions = RemoteSubmissions::new(format!("{}/applications", server.uri()), TIMEOUT)
        .expect("client builds");
    let history = submissions.history().await.expect("history loads");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status.label(), "Application Viewed");
}

#[tokio::test]
async fn remote_submissions_surface_rejections_and_bad_documents() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let submissions = RemoteSubmissions::new(server.uri(), TIMEOUT).expect("client builds");
    assert!(matches!(
        submissions.submit(packet()).await,
        Err(SubmissionError::Status { status: 422 })
    ));
    assert!(matches!(
        submissions.history().await,
        Err(SubmissionError::InvalidResponse(_))
    ));
}
