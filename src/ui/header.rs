use chrono::{DateTime, Local, Timelike};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::TimeOfDay;

/// Time left until midnight, e.g. "2h 15m until witching hour"
pub fn witching_countdown(now: DateTime<Local>) -> String {
    let remaining = 24 * 3600 - now.num_seconds_from_midnight();
    let hours = remaining / 3600;
    let minutes = (remaining % 3600) / 60;
    format!("{}h {}m until witching hour", hours, minutes)
}

/// Render the header: logo, subtitle and the sound/time indicators
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::horizontal([Constraint::Min(30), Constraint::Length(44)]).split(inner);

    let time_of_day = app.theme.time_of_day();
    let title_color = if time_of_day == TimeOfDay::Witching {
        Color::LightRed
    } else {
        Color::Red
    };

    let subtitle = if time_of_day == TimeOfDay::Witching {
        "The witching hour is upon us...".to_string()
    } else {
        witching_countdown(app.clock().now_datetime())
    };

    // Clicks that have not yet become a scare show as skulls
    let skulls = "☠".repeat(app.theme.logo_click_count() as usize);

    let title = vec![
        Line::from(vec![
            Span::styled("☠ Nightmare Dashboard ", Style::default().fg(title_color).bold()),
            Span::styled(skulls, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(subtitle).italic().dark_gray(),
    ];
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let time_icon = match time_of_day {
        TimeOfDay::Day => "☀",
        TimeOfDay::Evening | TimeOfDay::Witching => "☾",
    };
    let sound = &app.sound;
    let volume = if sound.is_muted() {
        Span::styled("muted", Style::default().fg(Color::Red))
    } else {
        Span::raw(format!(
            "vol {:>3.0}%  fx {:>3.0}%",
            sound.master_volume() * 100.0,
            sound.effects_volume() * 100.0
        ))
    };
    let ambient_label = format!("amb {:>3.0}%", sound.ambient_volume() * 100.0);
    let ambient = if sound.ambient_playing() {
        Span::styled(ambient_label, Style::default().fg(Color::Magenta))
    } else {
        Span::styled(ambient_label, Style::default().dark_gray())
    };

    let status = vec![
        Line::from(vec![
            Span::raw(format!("{} {}", time_icon, time_of_day.label())),
            Span::raw("  "),
            Span::styled(
                app.theme.activity_level().label(),
                Style::default().fg(Color::Magenta),
            ),
        ])
        .right_aligned(),
        Line::from(vec![volume, Span::raw("  "), ambient]).right_aligned(),
    ];
    frame.render_widget(Paragraph::new(status), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_witching_countdown() {
        let evening = Local.with_ymd_and_hms(2026, 10, 31, 21, 45, 0).unwrap();
        assert_eq!(witching_countdown(evening), "2h 15m until witching hour");

        let noon = Local.with_ymd_and_hms(2026, 10, 31, 12, 0, 0).unwrap();
        assert_eq!(witching_countdown(noon), "12h 0m until witching hour");
    }
}
