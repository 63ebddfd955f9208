use clap::Args;
use job_seeker::config::LatencyConfig;
use job_seeker::error::AppError;
use job_seeker::workflows::apply::{
    ApplicantProfile, ApplicationSubmissionService, InMemorySubmissions, StepContent,
};
use job_seeker::workflows::search::{
    interpret, InMemoryJobSearch, JobSearchService, Submission, EXAMPLE_GOALS,
};
use job_seeker::workflows::session::{
    DemoSession, DetailContent, DetailPanel, DetailView, ListPanel,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Career goal to search for. Defaults to the first example goal.
    #[arg(long)]
    pub(crate) goal: Option<String>,
    /// Job response payload to load instead of searching by goal.
    #[arg(long)]
    pub(crate) payload: Option<PathBuf>,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { goal, payload } = args;

    let latency = LatencyConfig::none();
    let search = InMemoryJobSearch::with_sample_catalog(latency.search)?;
    let submissions = InMemorySubmissions::new(latency.submit);
    let profile = ApplicantProfile::default();
    let mut session = DemoSession::new();

    let submission = match payload {
        Some(path) => Submission {
            goal: goal.unwrap_or_default(),
            payload: Some(std::fs::read_to_string(path)?),
        },
        None => Submission::goal(goal.unwrap_or_else(|| EXAMPLE_GOALS[0].to_string())),
    };

    println!("Job Seeker Agent demo");
    let query = interpret(&submission)?;
    session.apply_result_set(search.search(query).await?);

    let snapshot = session.snapshot(&profile);
    if let Some(goal) = &snapshot.goal {
        println!("\nGoal: {goal}");
    }
    if let Some(message) = &snapshot.agent_message {
        println!("Agent: {message}");
    }
    let Some(list) = snapshot.list else {
        return Ok(());
    };
    render_list(&list);

    let Some(first) = list.rows.first() else {
        println!("\nNothing to apply for.");
        return Ok(());
    };
    let job_id = first.job_id.clone();
    session.select(&job_id);

    for view in DetailView::ordered() {
        session.show_view(view);
        if let Some(detail) = session.snapshot(&profile).detail {
            render_detail(view, &detail);
        }
    }

    println!("\nApplying to {}", first.title);
    session.open_wizard()?;
    loop {
        let Some(wizard) = session.snapshot(&profile).wizard else {
            break;
        };
        println!(
            "  [{:>3}%] {}",
            wizard.progress_percent, wizard.step_label
        );
        if wizard.can_advance {
            session.wizard_advance()?;
        } else if wizard.can_submit {
            let packet = session.wizard_begin_submit(&profile)?;
            let receipt = submissions.submit(packet).await?;
            session.wizard_complete_submit(&job_id, receipt);
        } else {
            if let StepContent::Success { message, receipt } = wizard.content {
                println!("  {message}");
                if let Some(receipt) = receipt {
                    println!("  Confirmation: {}", receipt.confirmation_id);
                }
            }
            break;
        }
    }
    session.close_wizard();

    println!("\nApplication history");
    for receipt in submissions.history().await? {
        println!(
            "  {} - {} at {} ({})",
            receipt.confirmation_id,
            receipt.job_title,
            receipt.company_name,
            receipt.status.label()
        );
    }

    Ok(())
}

fn render_list(list: &ListPanel) {
    println!("\n{} ({})", list.heading, list.count_label);
    for row in &list.rows {
        println!(
            "  - {} @ {} [{}] {} / {}",
            row.title, row.company_name, row.location, row.match_label, row.tips_label
        );
    }
}

fn render_detail(view: DetailView, detail: &DetailPanel) {
    let DetailPanel::Showing { content, .. } = detail else {
        return;
    };
    println!("\n{view}");
    match content {
        DetailContent::Posting(posting) => {
            println!("  {} at {}", posting.title, posting.company_name);
            println!("  Location: {}", posting.location);
            if !posting.workplace_tags.is_empty() {
                println!("  Workplace: {}", posting.workplace_tags.join(", "));
            }
            if let Some(compensation) = &posting.compensation {
                println!("  Compensation: {compensation}");
            }
        }
        DetailContent::Resume { html } | DetailContent::CoverLetter { html } => {
            println!("  {} characters of rendered HTML", html.len());
        }
        DetailContent::Feedback(feedback) => {
            println!("  {} Match: {}", feedback.match_label, feedback.comment);
            for suggestion in &feedback.suggestions {
                println!("  * {suggestion}");
            }
            for action in &feedback.actions {
                println!("  > {} ({})", action.description, action.kind_label);
            }
        }
    }
}
