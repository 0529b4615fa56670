// src/render.rs
//! Plain-text rendering of job cards and pages

use crate::filter::is_blank;
use crate::types::{HomePage, JobCard, JobSummary, SaveOutcome, SearchResults};

const WRAP_WIDTH: usize = 78;
const DESCRIPTION_LINES: usize = 2;

pub fn job_card(card: &JobCard) -> String {
    let job = &card.job;
    let bookmark = if card.is_saved { "[saved]" } else { "[ ]" };

    let mut lines = vec![
        format!("{}  {}  ({})", job.title, bookmark, job.job_type),
        format!("  {}", job.company),
        format!(
            "  Location: {:<28} Experience: {}",
            job.location, job.experience
        ),
        format!(
            "  Education: {:<27} Posted {}",
            job.education.to_string(),
            job.posted_date.format("%-m/%-d/%Y")
        ),
    ];
    lines.extend(
        clamp_lines(&job.description, WRAP_WIDTH - 2, DESCRIPTION_LINES)
            .into_iter()
            .map(|line| format!("  {}", line)),
    );
    if !job.skills.is_empty() {
        lines.push(format!("  Skills: {}", job.skills.join(", ")));
    }
    lines.push(format!("  {} • {}", job.work_mode, job.company_info.size));
    lines.push(format!("  {} | {}", job.location, job.salary));
    lines.push(format!("  View details: {}", card.detail_path));

    lines.join("\n")
}

pub fn search_results(results: &SearchResults) -> String {
    let mut out = String::new();
    if !results.query.is_empty() {
        out.push_str(&format!(
            "Found {} jobs matching \"{}\"\n\n",
            results.count, results.query
        ));
    }
    let cards: Vec<String> = results.jobs.iter().map(job_card).collect();
    out.push_str(&cards.join("\n\n"));
    out
}

pub fn home_page(page: &HomePage) -> String {
    let mut out = String::from(
        "Find Your Next Opportunity\nBrowse through our curated list of AI and tech jobs\n\n",
    );

    if !page.recently_viewed.is_empty() {
        out.push_str(&summary_section("Recently Viewed", &page.recently_viewed));
        out.push('\n');
    }
    if !page.saved_jobs.is_empty() {
        out.push_str(&summary_section("Saved Jobs", &page.saved_jobs));
        out.push('\n');
    }

    out.push_str(&search_results(&page.results));
    out
}

/// Heading followed by id, title, company and location of each job
pub fn summary_section(heading: &str, jobs: &[JobSummary]) -> String {
    let mut out = format!("== {} ==\n", heading);
    for job in jobs {
        out.push_str(&format!(
            "  #{} {}\n     {}\n     {}\n",
            job.id, job.title, job.company, job.location
        ));
    }
    out
}

pub fn save_outcome(outcome: &SaveOutcome) -> String {
    format!("{}: {}", outcome.title, outcome.description)
}

/// Word-wrap `text` to `width` and keep at most `max_lines`, marking the cut with "..."
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if is_blank(text) || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push_str("...");
        }
    }
    lines
}
