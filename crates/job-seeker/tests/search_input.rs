//! End-to-end behavior of the goal/payload form: what a submission turns into
//! once it has gone through interpretation, the search seam, and the session.

use std::time::Duration;

use job_seeker::workflows::apply::ApplicantProfile;
use job_seeker::workflows::search::{
    interpret, InMemoryJobSearch, InputError, JobSearchService, PayloadError, ResultSet,
    Submission, EXAMPLE_GOALS, SAMPLE_PAYLOAD,
};
use job_seeker::workflows::session::{DemoSession, DetailPanel, SELECT_PROMPT};

async fn run(session: &mut DemoSession, submission: Submission) -> Result<(), InputError> {
    let search = InMemoryJobSearch::with_sample_catalog(Duration::ZERO).expect("catalog");
    match interpret(&submission) {
        Ok(query) => {
            let results = search.search(query).await.expect("search succeeds");
            session.apply_result_set(results);
            Ok(())
        }
        Err(err) => {
            session.reject_input(submission, &err);
            Err(err)
        }
    }
}

#[tokio::test]
async fn pasted_payload_without_goal_uses_derived_headline() {
    let mut session = DemoSession::new();
    run(&mut session, Submission::with_payload("  ", SAMPLE_PAYLOAD))
        .await
        .expect("sample payload accepted");

    let snapshot = session.snapshot(&ApplicantProfile::default());
    assert_eq!(
        snapshot.goal.as_deref(),
        Some(
            "Looking for Frontend Engineer, UI Components and Patterns roles, especially at \
             companies like Stripe"
        )
    );
    assert_eq!(
        snapshot.agent_message.as_deref(),
        Some("Thank you for using Job Seeker Agent, I've picked 3 jobs for you.")
    );
    let list = snapshot.list.expect("list panel");
    assert_eq!(list.count_label, "3 matches found");
    assert!(list.rows.iter().all(|row| !row.selected));
    match snapshot.detail {
        Some(DetailPanel::Prompt { message }) => assert_eq!(message, SELECT_PROMPT),
        other => panic!("expected prompt, got {other:?}"),
    }
}

#[tokio::test]
async fn caller_goal_wins_over_derived_headline() {
    let mut session = DemoSession::new();
    run(
        &mut session,
        Submission::with_payload("Design systems work", SAMPLE_PAYLOAD),
    )
    .await
    .expect("payload accepted");

    let goal = session.store().result_set().map(ResultSet::goal);
    assert_eq!(goal, Some("Design systems work"));
}

#[tokio::test]
async fn plain_goal_is_searched_verbatim() {
    let mut session = DemoSession::new();
    let goal = EXAMPLE_GOALS[0];
    run(&mut session, Submission::goal(goal))
        .await
        .expect("goal accepted");

    let results = session.store().result_set().expect("results shown");
    assert_eq!(results.goal(), goal);
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn goal_field_holding_json_is_treated_as_payload() {
    let mut session = DemoSession::new();
    run(&mut session, Submission::goal(SAMPLE_PAYLOAD))
        .await
        .expect("payload in goal accepted");

    let results = session.store().result_set().expect("results shown");
    assert!(results.goal().starts_with("Looking for Frontend Engineer"));
}

#[tokio::test]
async fn malformed_goal_json_falls_back_to_goal_search() {
    let mut session = DemoSession::new();
    run(&mut session, Submission::goal("{invalid"))
        .await
        .expect("lenient mode never fails on non-empty text");

    let results = session.store().result_set().expect("results shown");
    assert_eq!(results.goal(), "{invalid");
}

#[tokio::test]
async fn invalid_pasted_payload_keeps_prior_results() {
    let mut session = DemoSession::new();
    run(&mut session, Submission::goal("Remote React Developer position"))
        .await
        .expect("goal accepted");

    let err = run(&mut session, Submission::with_payload("", r#"{"jobs":[{"jobId":"1"}]}"#))
        .await
        .expect_err("payload fails validation");
    assert!(matches!(
        err,
        InputError::InvalidPayload(PayloadError::Schema { .. })
    ));

    let snapshot = session.snapshot(&ApplicantProfile::default());
    assert_eq!(snapshot.goal.as_deref(), Some("Remote React Developer position"));
    assert!(snapshot.notice.is_some());
}

#[tokio::test]
async fn blank_submission_is_rejected() {
    let mut session = DemoSession::new();
    let err = run(&mut session, Submission::with_payload(" \n", "   "))
        .await
        .expect_err("nothing to search");
    assert_eq!(err, InputError::EmptySubmission);
    assert!(!session.snapshot(&ApplicantProfile::default()).has_results());
}

#[tokio::test]
async fn empty_job_list_renders_zero_matches() {
    let mut session = DemoSession::new();
    run(&mut session, Submission::with_payload("Nothing", r#"{"jobs":[]}"#))
        .await
        .expect("empty list accepted");

    let list = session
        .snapshot(&ApplicantProfile::default())
        .list
        .expect("list panel");
    assert_eq!(list.count_label, "0 matches found");
    assert!(list.rows.is_empty());
}
