use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::config::RANDOM_EVENT_DURATION;
use crate::models::{RandomEventKind, TimeOfDay};

const GHOST: [&str; 5] = [" .-. ", "(o o)", "| O \\", " \\   \\", "  `~~`"];

/// Width of the shadow sweeping across the screen
const SHADOW_WIDTH: u16 = 12;

/// Center a `width` x `height` box inside `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Full-screen flicker, shadow pass and watching eyes
pub fn render_random_event(frame: &mut Frame, area: Rect, app: &App) {
    // The witching hour flickers faintly on its own
    if app.theme.time_of_day() == TimeOfDay::Witching && app.frame_count % 40 == 0 {
        frame
            .buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));
    }

    let Some(kind) = app.theme.random_event() else {
        return;
    };

    match kind {
        RandomEventKind::Flicker => {
            if app.frame_count % 3 == 0 {
                frame.buffer_mut().set_style(
                    area,
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                );
            }
        }
        RandomEventKind::ShadowPass => {
            let progress = app
                .event_started
                .map(|started| {
                    let elapsed = app.clock().instant().saturating_duration_since(started);
                    (elapsed.as_secs_f64() / RANDOM_EVENT_DURATION.as_secs_f64()).min(1.0)
                })
                .unwrap_or(0.0);
            let travel = area.width.saturating_add(SHADOW_WIDTH) as f64;
            let left = (progress * travel) as u16;
            let x = left.saturating_sub(SHADOW_WIDTH);
            let width = left.min(area.width).saturating_sub(x);
            if width > 0 {
                let band = Rect::new(area.x + x, area.y, width, area.height);
                frame
                    .buffer_mut()
                    .set_style(band, Style::default().bg(Color::Black).fg(Color::DarkGray));
            }
        }
        RandomEventKind::Whisper => {
            let eyes = "◉  ◉";
            if area.width > 8 && area.height > 6 {
                let spot = Rect::new(area.x + area.width - 8, area.y + area.height / 4, 4, 1);
                frame.render_widget(Paragraph::new(eyes).red().bold(), spot);
            }
        }
        RandomEventKind::TextScramble | RandomEventKind::Footsteps => {}
    }
}

/// The small ghost in the bottom-right corner
pub fn render_ghost(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 4).max(9);
    let height = GHOST.len() as u16 + 3;
    if area.width < width + 2 || area.height < height + 2 {
        return;
    }

    let spot = Rect::new(
        area.x + area.width - width - 2,
        area.y + area.height - height - 2,
        width,
        height,
    );
    frame.render_widget(Clear, spot);

    let mut lines: Vec<Line> = GHOST
        .iter()
        .map(|l| Line::from(*l).centered().gray())
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(message.to_string()).centered().italic());

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().dark_gray()),
        ),
        spot,
    );
}

/// Full-screen scare
pub fn render_jump_scare(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

    let face = [
        "   .-\"\"\"\"-.   ",
        "  /  _  _  \\  ",
        " |  (o)(o)  | ",
        " |    __    | ",
        " |   (  )   | ",
        "  \\  '--'  /  ",
        "   '-.__.-'   ",
        "",
        "BOO!",
    ];
    let box_area = centered(area, 20, face.len() as u16);
    let lines: Vec<Line> = face
        .iter()
        .map(|l| Line::from(*l).centered())
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::Red).bold()),
        box_area,
    );
}
