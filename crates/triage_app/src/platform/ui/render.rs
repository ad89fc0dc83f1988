use triage_core::{AppViewModel, FlowView, Progress, QuestionOption, ResourceRecord};

use super::constants::*;

/// Text lines for one full render of the dialog.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    match &view.flow {
        FlowView::Closed => {
            lines.push(format!(
                "Support dialog closed. [{KEY_OPEN}] open  [{KEY_QUIT}] quit"
            ));
            return lines;
        }
        FlowView::Question {
            text,
            description,
            options,
            can_go_back,
            ..
        } => {
            lines.push(progress_line(&view.progress));
            lines.push(String::new());
            lines.push((*text).to_string());
            lines.push(format!("  {description}"));
            lines.push(String::new());
            lines.extend(options.iter().enumerate().map(|(i, o)| option_line(i, o)));
            lines.push(String::new());
            lines.push(navigation_line(*can_go_back, "Back"));
        }
        FlowView::Results {
            resource,
            can_go_back,
        } => {
            lines.push(progress_line(&view.progress));
            lines.push(String::new());
            lines.push("Support Resources For You".to_string());
            lines.push(
                "  Based on your selections, here are resources that can help you right now."
                    .to_string(),
            );
            lines.push(
                "  All services are confidential and available 24/7 unless otherwise noted."
                    .to_string(),
            );
            lines.push(String::new());
            lines.extend(resource_lines(resource, view.copy.label()));
            lines.push(String::new());
            lines.push(navigation_line(*can_go_back, "Change Selections"));
        }
    }

    lines
}

/// The view as a single JSON document.
pub fn render_json(view: &AppViewModel) -> serde_json::Result<String> {
    serde_json::to_string(view)
}

fn progress_line(progress: &Progress) -> String {
    let percent = progress.percent.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    );
    let step = if progress.label == "Complete" {
        progress.label.clone()
    } else {
        format!("Step {} of {}", progress.label, progress.total_steps)
    };
    format!("{step} [{bar}] {percent:.0}%")
}

fn option_line(index: usize, option: &QuestionOption) -> String {
    format!(
        "  {n}) {icon} {title}: {description}",
        n = index + 1,
        icon = option.icon,
        title = option.title,
        description = option.description
    )
}

fn resource_lines(resource: &ResourceRecord, copy_label: &str) -> Vec<String> {
    let mut lines = vec![
        format!("  {} ({})", resource.label, resource.hours),
        format!("  {}", resource.description),
    ];
    if let Some(instruction) = resource.instruction {
        lines.push(format!("  {instruction}"));
    }
    lines.push(format!("  {}    [{KEY_COPY}] {copy_label}", resource.number));
    lines
}

fn navigation_line(can_go_back: bool, back_label: &str) -> String {
    let restart = format!("[{KEY_RESTART}] Start Over");
    let close = format!("[{KEY_CLOSE}] Close");
    if can_go_back {
        format!("[{KEY_BACK}] {back_label}  {restart}  {close}")
    } else {
        format!("{restart}  {close}")
    }
}
