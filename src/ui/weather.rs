use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, Panel};
use crate::models::WeatherCondition;
use crate::ui::panel_border;

fn condition_color(condition: WeatherCondition) -> Color {
    match condition {
        WeatherCondition::Foggy => Color::Gray,
        WeatherCondition::Stormy => Color::Yellow,
        WeatherCondition::Cloudy => Color::DarkGray,
        WeatherCondition::Moonlit => Color::LightBlue,
        WeatherCondition::Haunted => Color::LightMagenta,
    }
}

/// Render the weather widget
pub fn render_weather(frame: &mut Frame, area: Rect, app: &App) {
    let weather = app.dashboard.weather();
    let color = condition_color(weather.condition);

    let block = Block::default()
        .title(Line::from(" Omens ").bold())
        .borders(Borders::ALL)
        .border_style(panel_border(app, Panel::Weather));

    let lines = vec![
        Line::from(vec![Span::styled(
            format!("{}°C", weather.temperature),
            Style::default().fg(Color::Cyan).bold(),
        )]),
        Line::from(Span::styled(
            weather.condition.label(),
            Style::default().fg(color).bold(),
        )),
        Line::from(weather.condition.description()).italic().dark_gray(),
        Line::from(""),
        Line::from(format!(
            "{} {}",
            weather.moon_phase.glyph(),
            weather.moon_phase.label()
        )),
        Line::from(format!("Humidity  {}%", weather.humidity)),
        Line::from(format!("Wind      {} km/h", weather.wind_speed)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
