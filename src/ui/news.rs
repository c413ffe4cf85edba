use rand::Rng;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::{App, Panel};
use crate::models::{NewsCategory, NewsItem, RandomEventKind, format_age};
use crate::ui::panel_border;

const RUNES: [char; 24] = [
    'ᚠ', 'ᚢ', 'ᚦ', 'ᚨ', 'ᚱ', 'ᚲ', 'ᚷ', 'ᚹ', 'ᚺ', 'ᚾ', 'ᛁ', 'ᛃ', 'ᛈ', 'ᛇ', 'ᛉ', 'ᛊ', 'ᛏ', 'ᛒ',
    'ᛖ', 'ᛗ', 'ᛚ', 'ᛜ', 'ᛞ', 'ᛟ',
];

/// Chance that a character is replaced while text-scramble is active
const SCRAMBLE_RATE: f64 = 0.3;

/// Swap roughly a third of the characters for runes
pub fn scramble<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    text.chars()
        .map(|c| {
            if rng.gen_bool(SCRAMBLE_RATE) {
                RUNES[rng.gen_range(0..RUNES.len())]
            } else {
                c
            }
        })
        .collect()
}

fn category_color(category: NewsCategory) -> Color {
    match category {
        NewsCategory::Paranormal => Color::LightRed,
        NewsCategory::Local => Color::LightMagenta,
        NewsCategory::Science => Color::LightGreen,
        NewsCategory::Discovery => Color::Yellow,
        NewsCategory::Astronomy => Color::LightBlue,
        NewsCategory::Weather => Color::Cyan,
    }
}

/// Render the news list
pub fn render_news(frame: &mut Frame, area: Rect, app: &mut App) {
    let scrambled = app.theme.random_event() == Some(RandomEventKind::TextScramble);
    let now = app.clock().now_datetime();
    let mut rng = rand::thread_rng();

    let mut block = Block::default()
        .title(Line::from(" Dark Chronicles ").bold())
        .borders(Borders::ALL)
        .border_style(panel_border(app, Panel::News));
    if app.theme.random_event_active() {
        block = block.title(Line::from(" 👻 ").right_aligned());
    }

    let items: Vec<ListItem> = app
        .dashboard
        .news()
        .iter()
        .map(|item| {
            let title = if scrambled {
                scramble(&item.title, &mut rng)
            } else {
                item.title.clone()
            };
            news_item(item, title, format_age(item.timestamp, now))
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(
            Line::from("The chronicles are silent... for now").dark_gray(),
        )])
    } else {
        List::new(items)
    }
    .block(block)
    .highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.news_state);
}

fn news_item(item: &NewsItem, title: String, age: String) -> ListItem<'static> {
    let marker = if item.is_read {
        Span::raw("  ")
    } else {
        Span::styled("▌ ", Style::default().fg(Color::Red))
    };
    let title_style = if item.is_read {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    ListItem::new(vec![
        Line::from(vec![
            marker,
            Span::styled(
                format!("[{}]", item.category.label()),
                Style::default().fg(category_color(item.category)),
            ),
            Span::styled(format!("  {}", age), Style::default().dark_gray()),
        ]),
        Line::from(vec![Span::raw("  "), Span::styled(title, title_style)]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scramble_keeps_length_and_uses_runes() {
        let mut rng = StdRng::seed_from_u64(8);
        let text = "Whispers Heard in Empty Theater After Midnight";
        let out = scramble(text, &mut rng);

        assert_eq!(out.chars().count(), text.chars().count());
        assert_ne!(out, text);
        for (a, b) in text.chars().zip(out.chars()) {
            assert!(a == b || RUNES.contains(&b));
        }
    }

    #[test]
    fn test_scramble_empty() {
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(scramble("", &mut rng), "");
    }
}
