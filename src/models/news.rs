use chrono::{DateTime, Local};

/// Fixed set of headline categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsCategory {
    Paranormal,
    Local,
    Science,
    Discovery,
    Astronomy,
    Weather,
}

impl NewsCategory {
    pub fn label(&self) -> &'static str {
        match self {
            NewsCategory::Paranormal => "Paranormal",
            NewsCategory::Local => "Local",
            NewsCategory::Science => "Science",
            NewsCategory::Discovery => "Discovery",
            NewsCategory::Astronomy => "Astronomy",
            NewsCategory::Weather => "Weather",
        }
    }
}

/// A headline in the news widget
#[derive(Debug, Clone)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub category: NewsCategory,
    pub timestamp: DateTime<Local>,
    pub is_read: bool,
}

const HEADLINES: [(&str, NewsCategory); 8] = [
    (
        "Strange Lights Spotted Over Abandoned Cemetery",
        NewsCategory::Paranormal,
    ),
    (
        "Local Mansion Reports Third Ghostly Sighting This Week",
        NewsCategory::Local,
    ),
    (
        "Scientists Baffled by Unexplained Temperature Drops",
        NewsCategory::Science,
    ),
    (
        "Ancient Tome Discovered in Forgotten Crypt",
        NewsCategory::Discovery,
    ),
    (
        "Midnight Howling Disturbs Peaceful Neighborhood",
        NewsCategory::Local,
    ),
    (
        "Blood Moon Eclipse Predicted for Tonight",
        NewsCategory::Astronomy,
    ),
    (
        "Whispers Heard in Empty Theater After Midnight",
        NewsCategory::Paranormal,
    ),
    (
        "Fog Bank Refuses to Lift for Third Consecutive Day",
        NewsCategory::Weather,
    ),
];

/// Number of headlines shown on a fresh dashboard
pub const SEEDED_HEADLINES: usize = 5;

/// Seed the news feed, each headline one hour older than the previous
pub fn seed_news(now: DateTime<Local>) -> Vec<NewsItem> {
    HEADLINES
        .iter()
        .take(SEEDED_HEADLINES)
        .enumerate()
        .map(|(i, (title, category))| NewsItem {
            id: format!("news-{}", i),
            title: title.to_string(),
            category: *category,
            timestamp: now - chrono::Duration::hours(i as i64),
            is_read: false,
        })
        .collect()
}

/// Format a timestamp as "X minutes ago" style text
pub fn format_age(timestamp: DateTime<Local>, now: DateTime<Local>) -> String {
    let minutes = (now - timestamp).num_minutes().max(0);
    let hours = minutes / 60;

    if hours >= 24 {
        format!("{}d ago", hours / 24)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}
