use job_seeker::render::{escape_text, Theme};
use job_seeker::workflows::apply::{StepContent, SubmissionReceipt, WizardView};
use job_seeker::workflows::search::{Submission, EXAMPLE_GOALS};
use job_seeker::workflows::session::{
    DetailContent, DetailPanel, FeedbackView, ListPanel, PostingView, SessionSnapshot, TabMarker,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const NAV_LINKS: [&str; 5] = ["Home", "My Network", "Jobs", "Messaging", "Notifications"];

fn document(theme: &Theme, title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>{}{}</body></html>",
        escape_text(title),
        theme.stylesheet(),
        navbar(),
        body
    )
}

fn navbar() -> String {
    let mut html = String::from("<nav><strong>Job Seeker Agent</strong>");
    for link in NAV_LINKS {
        html.push_str(&format!("<span>{link}</span>"));
    }
    html.push_str("<a href=\"/history\">My Applications</a></nav>");
    html
}

/// Unreserved URL characters stay literal; everything else is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode an identifier for use as one path segment.
fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

fn post_button(action: &str, class: &str, label: &str, enabled: bool) -> String {
    format!(
        "<form method=\"post\" action=\"{}\" style=\"display:inline\"><button class=\"{}\"{}>{}</button></form>",
        action,
        class,
        if enabled { "" } else { " disabled" },
        escape_text(label)
    )
}

pub(crate) fn index_page(theme: &Theme, snapshot: &SessionSnapshot, searching: bool) -> String {
    let mut body = String::new();

    if let Some(notice) = &snapshot.notice {
        body.push_str(&format!(
            "<div class=\"notice\" role=\"alert\">{}</div>",
            escape_text(notice)
        ));
    }

    match (&snapshot.list, &snapshot.detail) {
        (Some(list), Some(detail)) => {
            body.push_str(&goal_header(snapshot, searching));
            body.push_str("<div class=\"layout\">");
            body.push_str(&list_panel(list));
            body.push_str("<main>");
            body.push_str(&detail_panel(detail));
            body.push_str("</main></div>");
        }
        _ => body.push_str(&input_form(snapshot.draft.as_ref(), searching)),
    }

    if let Some(wizard) = &snapshot.wizard {
        body.push_str(&wizard_modal(wizard));
    }

    document(theme, "Job Seeker Agent", &body)
}

fn input_form(draft: Option<&Submission>, searching: bool) -> String {
    let goal = draft.map(|draft| draft.goal.as_str()).unwrap_or_default();
    let payload = draft
        .and_then(|draft| draft.payload.as_deref())
        .unwrap_or_default();

    let mut html = String::from("<main><div class=\"card\"><h1>What kind of job are you looking for?</h1>");
    html.push_str(&format!(
        "<form method=\"post\" action=\"/search\">\
         <p><textarea name=\"goal\" rows=\"3\" cols=\"80\" placeholder=\"Describe your career goal\">{}</textarea></p>\
         <p><textarea name=\"payload\" rows=\"6\" cols=\"80\" placeholder=\"Or paste a job response payload\">{}</textarea></p>\
         <button class=\"primary\"{}>{}</button></form>",
        escape_text(goal),
        escape_text(payload),
        if searching { " disabled" } else { "" },
        if searching { "Searching..." } else { "Find Jobs" }
    ));

    html.push_str("<p>Try one of these:</p><div>");
    for example in EXAMPLE_GOALS {
        html.push_str(&format!(
            "<form method=\"post\" action=\"/search\" style=\"display:inline\">\
             <input type=\"hidden\" name=\"goal\" value=\"{0}\"><button class=\"chip\"{1}>{0}</button></form>",
            escape_text(example),
            if searching { " disabled" } else { "" }
        ));
    }
    html.push_str("</div></div></main>");
    html
}

fn goal_header(snapshot: &SessionSnapshot, searching: bool) -> String {
    let goal = snapshot.goal.as_deref().unwrap_or_default();
    let mut html = String::from("<div class=\"card\">");
    html.push_str(&format!("<h1>{}</h1>", escape_text(goal)));
    if let Some(message) = &snapshot.agent_message {
        html.push_str(&format!("<p>{}</p>", escape_text(message)));
    }
    html.push_str(&format!(
        "<form method=\"post\" action=\"/goal\"><input name=\"goal\" size=\"80\" value=\"{}\"> <button class=\"primary\"{}>{}</button></form>",
        escape_text(goal),
        if searching { " disabled" } else { "" },
        if searching { "Searching..." } else { "Update goal" }
    ));
    html.push_str(&post_button("/reset", "chip", "New search", !searching));
    html.push_str("</div>");
    html
}

fn list_panel(list: &ListPanel) -> String {
    let mut html = format!(
        "<aside class=\"sidebar\"><h2>{}</h2><div class=\"count\">{}</div>",
        escape_text(list.heading),
        escape_text(&list.count_label)
    );

    for row in &list.rows {
        html.push_str(&format!(
            "<form method=\"post\" action=\"/jobs/{}/select\"><button class=\"row{}\" title=\"{}\">\
             <strong>{}</strong><br>{}<br><small>{}</small><br><span class=\"chip\"{}>{}</span><span class=\"chip\">{}</span></button></form>",
            path_segment(row.job_id.as_str()),
            if row.selected { " selected" } else { "" },
            escape_text(&row.comment),
            escape_text(&row.title),
            escape_text(&row.company_name),
            escape_text(&row.location),
            if row.high_match { " style=\"color: var(--primary-light)\"" } else { "" },
            escape_text(&row.match_label),
            escape_text(&row.tips_label)
        ));
    }

    html.push_str("</aside>");
    html
}

fn detail_panel(panel: &DetailPanel) -> String {
    match panel {
        DetailPanel::Prompt { message } => {
            format!("<div class=\"card\"><p>{}</p></div>", escape_text(message))
        }
        DetailPanel::Showing { tabs, content, .. } => {
            let mut html = String::from("<div class=\"card\"><div class=\"tabs\">");
            for tab in tabs {
                html.push_str(&tab_button(tab));
            }
            html.push_str("</div>");
            html.push_str(&post_button("/apply/open", "primary", "Apply", true));
            html.push_str(&detail_content(content));
            html.push_str("</div>");
            html
        }
    }
}

fn tab_button(tab: &TabMarker) -> String {
    let action = format!("/views/{}", tab.slug);
    post_button(&action, if tab.active { "active" } else { "" }, tab.label, true)
}

fn detail_content(content: &DetailContent) -> String {
    match content {
        DetailContent::Posting(posting) => posting_view(posting),
        DetailContent::Resume { html } | DetailContent::CoverLetter { html } => {
            format!("<div class=\"rich\">{html}</div>")
        }
        DetailContent::Feedback(feedback) => feedback_view(feedback),
    }
}

fn posting_view(posting: &PostingView) -> String {
    let mut html = format!(
        "<h1>{}</h1><p>{} &middot; {}</p><p>",
        escape_text(&posting.title),
        escape_text(&posting.company_name),
        escape_text(&posting.location)
    );
    for tag in &posting.workplace_tags {
        html.push_str(&format!("<span class=\"chip\">{}</span>", escape_text(tag)));
    }
    if let Some(compensation) = &posting.compensation {
        html.push_str(&format!("<span class=\"chip\">{}</span>", escape_text(compensation)));
    }
    if !posting.experience_level.is_empty() {
        html.push_str(&format!(
            "<span class=\"chip\">{}</span>",
            escape_text(&posting.experience_level)
        ));
    }
    html.push_str("</p>");
    html.push_str(&format!(
        "<h2>About the company</h2><div class=\"rich\">{}</div><h2>About the job</h2><div class=\"rich\">{}</div>",
        posting.company_html, posting.description_html
    ));
    html
}

fn feedback_view(feedback: &FeedbackView) -> String {
    let mut html = format!(
        "<h2><span class=\"chip\">{} Match</span></h2><p>{}</p><h3>Suggestions</h3><ul>",
        escape_text(&feedback.match_label),
        escape_text(&feedback.comment)
    );
    for suggestion in &feedback.suggestions {
        html.push_str(&format!("<li>{}</li>", escape_text(suggestion)));
    }
    html.push_str("</ul><h3>Recommended actions</h3>");
    for action in &feedback.actions {
        html.push_str(&format!(
            "<div class=\"card\"><p>{}</p><small>{}</small><br><small>{}</small></div>",
            escape_text(&action.description),
            escape_text(&action.kind_label),
            escape_text(&action.target_resource)
        ));
    }
    html
}

fn wizard_modal(wizard: &WizardView) -> String {
    let mut html = format!(
        "<div class=\"modal\" role=\"dialog\"><div class=\"card\"><h2>Apply to {}</h2><p>{}</p>\
         <div class=\"progress\"><span style=\"width: {}%\"></span></div><div class=\"steps\">",
        escape_text(&wizard.company_name),
        escape_text(&wizard.job_title),
        wizard.progress_percent
    );
    for marker in &wizard.steps {
        html.push_str(&format!(
            "<span{}>{}</span> ",
            if marker.current { " class=\"current\"" } else { "" },
            escape_text(marker.label)
        ));
    }
    html.push_str("</div>");

    if let Some(error) = &wizard.last_error {
        html.push_str(&format!(
            "<div class=\"notice\" role=\"alert\">{}</div>",
            escape_text(error)
        ));
    }

    html.push_str(&step_content(&wizard.content));
    html.push_str("<p>");
    html.push_str(&post_button("/apply/close", "chip", "Close", !wizard.submitting));
    if wizard.can_retreat || (!wizard.can_advance && !wizard.can_submit) {
        html.push_str(&post_button("/apply/back", "chip", "Back", wizard.can_retreat));
    }
    if wizard.can_advance {
        html.push_str(&post_button("/apply/next", "primary", "Next", true));
    }
    if wizard.can_submit || wizard.submitting {
        let label = if wizard.submitting {
            "Submitting..."
        } else {
            "Submit application"
        };
        html.push_str(&post_button("/apply/submit", "primary", label, wizard.can_submit));
    }
    html.push_str("</p></div></div>");
    html
}

fn step_content(content: &StepContent) -> String {
    match content {
        StepContent::ContactInfo {
            contact,
            initials,
            note,
        } => format!(
            "<div class=\"card\"><span class=\"chip\">{}</span> <strong>{}</strong><br><small>{}</small>\
             <p>Email: {}<br>Phone: {}<br>LinkedIn: {}</p><small>{}</small></div>",
            escape_text(initials),
            escape_text(&contact.name),
            escape_text(&contact.headline),
            escape_text(&contact.email),
            escape_text(&contact.phone),
            escape_text(&contact.linkedin),
            escape_text(note)
        ),
        StepContent::CoverLetter { file_name, html } | StepContent::Resume { file_name, html } => {
            format!(
                "<p><span class=\"chip\">{}</span></p><div class=\"rich\">{}</div>",
                escape_text(file_name),
                html
            )
        }
        StepContent::Questions { questions } => {
            let mut html = String::from("<ol>");
            for question in questions {
                html.push_str(&format!(
                    "<li><strong>{}{}</strong><br>{}</li>",
                    escape_text(&question.question),
                    if question.required { " *" } else { "" },
                    escape_text(&question.answer)
                ));
            }
            html.push_str("</ol>");
            html
        }
        StepContent::Success { message, receipt } => {
            let mut html = format!("<h2>{}</h2>", escape_text(message));
            if let Some(receipt) = receipt {
                html.push_str(&format!(
                    "<p>Confirmation {} &middot; {}</p>",
                    escape_text(&receipt.confirmation_id),
                    escape_text(receipt.status.label())
                ));
            }
            html
        }
    }
}

pub(crate) fn history_page(theme: &Theme, receipts: &[SubmissionReceipt]) -> String {
    let mut body = String::from("<main><div class=\"card\"><h1>My Applications</h1>");
    if receipts.is_empty() {
        body.push_str("<p>No applications submitted yet.</p>");
    } else {
        body.push_str(
            "<table><tr><th>Confirmation</th><th>Role</th><th>Company</th><th>Submitted</th><th>Status</th></tr>",
        );
        for receipt in receipts {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_text(&receipt.confirmation_id),
                escape_text(&receipt.job_title),
                escape_text(&receipt.company_name),
                receipt.submitted_at.format("%Y-%m-%d %H:%M UTC"),
                escape_text(receipt.status.label())
            ));
        }
        body.push_str("</table>");
    }
    body.push_str("<p><a href=\"/\">Back to jobs</a></p></div></main>");
    document(theme, "My Applications", &body)
}
