use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, InputField};
use crate::validation::{parse_due_hours, validate_task_title};

/// Render the add-task modal as an overlay
pub fn render_input_modal(frame: &mut Frame, area: Rect, app: &App) {
    // Calculate modal size and position (centered)
    let modal_width = 50.min(area.width.saturating_sub(4));
    let modal_height = 11.min(area.height.saturating_sub(4));
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" New Dark Deed ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title field
        Constraint::Length(3), // Due field
        Constraint::Length(1), // Hint
        Constraint::Length(2), // Controls
    ])
    .split(inner);

    let valid = validate_task_title(&app.input_title);
    let due = parse_due_hours(&app.input_due);

    let title_color = if !valid && !app.input_title.is_empty() {
        Color::Red
    } else {
        Color::Yellow
    };
    render_field(frame, chunks[0], app, InputField::Title, &app.input_title, title_color);

    let due_color = if due.is_err() { Color::Red } else { Color::Yellow };
    render_field(frame, chunks[1], app, InputField::DueHours, &app.input_due, due_color);

    let hint = match due {
        Err(reason) => reason,
        Ok(_) if app.input_title.is_empty() => "Add a dark deed...",
        Ok(_) if !valid => "Even the void needs a name",
        Ok(_) => "",
    };
    frame.render_widget(Paragraph::new(hint).italic().dark_gray(), chunks[2]);

    let controls = Line::from(vec![
        Span::styled("[Tab]", Style::default().bold()),
        Span::raw(" Field   "),
        Span::styled("[Enter]", Style::default().bold()),
        Span::raw(" Add   "),
        Span::styled("[Esc]", Style::default().bold()),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(controls).centered().dark_gray(), chunks[3]);
}

/// A bordered text field. Only the field being typed into shows a cursor.
fn render_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    field: InputField,
    value: &str,
    color: Color,
) {
    let (label, placeholder) = match field {
        InputField::Title => ("Title", ""),
        InputField::DueHours => ("Due in hours", "none"),
    };
    let active = app.input_field == field;

    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(if active {
            Style::default().fg(color).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let text = if active {
        Line::from(format!("{}_", value))
    } else if value.is_empty() {
        Line::from(placeholder).dark_gray()
    } else {
        Line::from(value.to_string())
    };
    frame.render_widget(Paragraph::new(text).block(block), area);
}
