mod header;
mod input;
mod news;
mod overlay;
mod tasks;
mod weather;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::Paragraph,
};

use crate::app::{App, ModalState, Panel};
use crate::models::{ActivityLevel, RandomEventKind};

pub use input::render_input_modal;

/// Render the whole dashboard, overlays last
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(4), // Header
        Constraint::Min(8),    // Widgets
        Constraint::Length(1), // Footer
    ])
    .split(area);

    header::render_header(frame, chunks[0], app);

    let columns = Layout::horizontal([
        Constraint::Percentage(40), // Tasks
        Constraint::Percentage(25), // Weather
        Constraint::Percentage(35), // News
    ])
    .split(chunks[1]);

    tasks::render_tasks(frame, columns[0], app);
    weather::render_weather(frame, columns[1], app);
    news::render_news(frame, columns[2], app);

    render_footer(frame, chunks[2], app);

    overlay::render_random_event(frame, area, app);
    if let Some(message) = app.ghost() {
        overlay::render_ghost(frame, area, message);
    }

    if app.modal == ModalState::AddTask {
        render_input_modal(frame, area, app);
    }

    // The jump scare covers everything, modals included
    if app.theme.jump_scare_active() {
        overlay::render_jump_scare(frame, area);
    }
}

/// Border color for a widget, brighter when it has focus
pub(crate) fn panel_border(app: &App, panel: Panel) -> Style {
    if app.focus == panel {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        match app.theme.activity_level() {
            ActivityLevel::Idle => Style::default().fg(Color::DarkGray),
            ActivityLevel::Active => Style::default().fg(Color::Magenta),
            ActivityLevel::Hyperactive => Style::default().fg(Color::LightMagenta),
        }
    }
}

const SOUND_KEYS: &str = "[m] Mute  [b] Ambient  [+/-] Vol  [[/]] Fx  [{/}] Amb";

/// Render the footer area with either an eerie notice or navigation text
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let notice = match app.theme.random_event() {
        Some(RandomEventKind::Footsteps) => Some("Footsteps echo somewhere behind you..."),
        Some(RandomEventKind::Whisper) => Some("Something whispers your name..."),
        _ => None,
    };

    if let Some(text) = notice {
        frame.render_widget(
            Paragraph::new(text)
                .centered()
                .style(Style::default().fg(Color::Red).italic()),
            area,
        );
    } else {
        let nav = match app.focus {
            Panel::Tasks => "[a] Add  [space] Toggle  [d] Delete  [j/k] Move",
            Panel::News => "[enter] Read  [j/k] Move",
            Panel::Weather => "[r] Consult the spirits",
        };
        let text = format!("{}  [Tab] Focus  [l] Logo  {}  [q] Quit", nav, SOUND_KEYS);
        frame.render_widget(Paragraph::new(text).centered().dark_gray(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::SharedSink;
    use crate::clock::ManualClock;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn app() -> App {
        App::build(
            Arc::new(ManualClock::at_hour(21)),
            Box::new(SharedSink::default()),
            Some(3),
        )
    }

    #[test]
    fn test_dashboard_renders_widgets() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|f| render_dashboard(f, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Nightmare Dashboard"));
        assert!(text.contains("Haunted Tasks"));
        assert!(text.contains("Dark Chronicles"));
        assert!(text.contains("Investigate the old manor"));
    }

    #[test]
    fn test_jump_scare_overlay_renders() {
        let mut app = app();
        app.theme.trigger_jump_scare();
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|f| render_dashboard(f, &mut app)).unwrap();

        assert!(buffer_text(&terminal).contains("BOO!"));
    }

    #[test]
    fn test_footsteps_notice_in_footer() {
        let mut app = app();
        app.theme.start_random_event(RandomEventKind::Footsteps);
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|f| render_dashboard(f, &mut app)).unwrap();

        assert!(buffer_text(&terminal).contains("Footsteps echo"));
    }

    #[test]
    fn test_ghost_renders_while_shown() {
        let mut app = app();
        app.show_ghost(crate::app::GHOST_CHEER, std::time::Duration::from_secs(3));
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|f| render_dashboard(f, &mut app)).unwrap();

        assert!(buffer_text(&terminal).contains("Well done, mortal"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        app.theme.trigger_jump_scare();
        app.show_ghost(crate::app::GHOST_STARE, std::time::Duration::from_secs(2));
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal.draw(|f| render_dashboard(f, &mut app)).unwrap();
    }
}
