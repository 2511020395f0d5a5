//! Built-in dataset shown when live dashboard data cannot be fetched.
use crate::{CalendarEvent, DashboardData, DigestEmail, FeedSignal, Stats};

fn feed(id: &str, kind: &str, title: &str, description: &str, timestamp: &str, icon: &str) -> FeedSignal {
    FeedSignal {
        id: id.to_string(),
        kind: Some(kind.to_string()),
        title: title.to_string(),
        description: description.to_string(),
        timestamp: timestamp.to_string(),
        icon: Some(icon.to_string()),
    }
}

fn event(id: &str, title: &str, time: &str, location: &str, icon: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        time: time.to_string(),
        location: Some(location.to_string()),
        icon: Some(icon.to_string()),
    }
}

fn email(id: &str, subject: &str, sender: &str, preview: &str, icon: &str) -> DigestEmail {
    DigestEmail {
        id: id.to_string(),
        subject: subject.to_string(),
        sender: sender.to_string(),
        preview: preview.to_string(),
        icon: Some(icon.to_string()),
    }
}

pub fn sample_dashboard_data() -> DashboardData {
    DashboardData {
        stats: Stats::default(),
        signal_feed: Some(vec![
            feed(
                "s1",
                "alert",
                "Critical System Anomaly",
                "Unusual activity detected in core network infrastructure.",
                "2 minutes ago",
                "🚨",
            ),
            feed(
                "s2",
                "info",
                "New AI Model Deployed",
                "Version 3.1 of sentiment analysis model is now active.",
                "15 minutes ago",
                "✨",
            ),
            feed(
                "s3",
                "warning",
                "High Traffic Spike",
                "Web traffic exceeded 200% average. Monitoring for DDoS.",
                "1 hour ago",
                "📈",
            ),
        ]),
        calendar_events: Some(vec![
            event("c1", "Project X Review", "Today, 2:00 PM", "Meeting Room 3", "🗓️"),
            event("c2", "Team Sync Call", "Tomorrow, 9:00 AM", "Virtual", "📞"),
            event("c3", "Client Demo Prep", "Feb 10, 11:00 AM", "Office", "💡"),
        ]),
        email_digest: Some(vec![
            email(
                "e1",
                "Weekly AI Performance Report",
                "Analytics Bot",
                "Overview of last week's AI model accuracy and efficiency...",
                "📊",
            ),
            email(
                "e2",
                "Urgent: Security Patch Required",
                "Security Team",
                "Critical vulnerability detected. Please apply patch immediately...",
                "🛡️",
            ),
            email(
                "e3",
                "New Feature Request: PulseBoard",
                "Product Team",
                "Summary of user feedback regarding new dashboard features...",
                "🚀",
            ),
        ]),
    }
}
