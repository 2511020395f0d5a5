use std::io::Write;

use chrono::Local;
use pulseboard_core::{DashboardView, DataSource, ItemView, RegionBody, RegionView};
use pulseboard_engine::ViewSink;

pub fn render_lines(view: &DashboardView) -> Vec<String> {
    let source_label = match view.source {
        DataSource::Live => "live",
        DataSource::Sample => "sample data",
    };

    let mut lines = Vec::new();
    lines.push(format!("PulseBoard ({source_label})"));
    lines.push(format!(
        "Signals: {} | Pending actions: {} | Upcoming events: {} | Emails processed: {}",
        view.stats.total_signals,
        view.stats.pending_actions,
        view.stats.upcoming_events,
        view.stats.emails_processed
    ));
    push_region(&mut lines, "Signal Feed", &view.signal_feed);
    push_region(&mut lines, "Calendar", &view.calendar);
    push_region(&mut lines, "Email Digest", &view.email_digest);
    lines
}

fn push_region(lines: &mut Vec<String>, heading: &str, region: &RegionView) {
    lines.push(String::new());
    lines.push(format!("== {heading} =="));
    if let Some(notice) = &region.notice {
        lines.push(format!("! {notice}"));
    }
    match &region.body {
        RegionBody::Placeholder(text) => lines.push((*text).to_string()),
        RegionBody::Items(items) => {
            for item in items {
                push_item(lines, item);
            }
        }
    }
}

fn push_item(lines: &mut Vec<String>, item: &ItemView) {
    lines.push(format!("{} {}", item.icon, item.heading));
    for line in &item.lines {
        lines.push(format!("   {line}"));
    }
    if let Some(meta) = &item.meta {
        lines.push(format!("   ({meta})"));
    }
}

/// Redraws the whole dashboard on stdout for every new view.
pub struct TerminalSink;

impl ViewSink for TerminalSink {
    fn render(&self, view: &DashboardView) {
        let mut out = std::io::stdout().lock();
        // Clear screen and home the cursor.
        let _ = write!(out, "\x1b[2J\x1b[H");
        for line in render_lines(view) {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out, "\nUpdated {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
        let _ = out.flush();
    }
}
