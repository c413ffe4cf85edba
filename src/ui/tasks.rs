use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::{App, Panel};
use crate::models::Task;
use crate::ui::panel_border;

/// Render the task list
pub fn render_tasks(frame: &mut Frame, area: Rect, app: &mut App) {
    let total = app.dashboard.tasks().len();
    let done = app.dashboard.completed_count();
    let all_done = app.dashboard.all_completed();
    let streak = app.dashboard.completed_tasks_streak();
    let tally = if streak > 0 {
        format!(" {}/{}  streak {} ", done, total, streak)
    } else {
        format!(" {}/{} ", done, total)
    };

    let mut block = Block::default()
        .title(Line::from(" Haunted Tasks ").bold())
        .title(Line::from(tally).right_aligned())
        .borders(Borders::ALL)
        .border_style(panel_border(app, Panel::Tasks));
    if all_done {
        block = block.style(Style::default().bg(Color::Rgb(30, 0, 40)));
    }

    let now = app.clock().now_datetime();
    let items: Vec<ListItem> = app
        .dashboard
        .tasks()
        .iter()
        .map(|task| task_item(task, now))
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(
            Line::from("No dark deeds remain... for now").dark_gray(),
        )])
    } else {
        List::new(items)
    }
    .block(block)
    .highlight_style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .bg(Color::DarkGray),
    )
    .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.task_state);
}

/// How far off a due date is, e.g. "due 3h" or "2h late"
fn due_label(due: DateTime<Local>, now: DateTime<Local>) -> String {
    let minutes = (due - now).num_minutes();
    match minutes {
        m if m < 0 && m > -60 => "late".to_string(),
        m if m < 0 => format!("{}h late", -m / 60),
        m if m < 60 => format!("due {}m", m),
        m => format!("due {}h", m / 60),
    }
}

fn task_item(task: &Task, now: DateTime<Local>) -> ListItem<'static> {
    let overdue = task.is_overdue(now);
    let (mark, style) = if task.completed {
        (
            "✔ ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else if overdue {
        ("○ ", Style::default().fg(Color::LightRed))
    } else {
        ("○ ", Style::default())
    };

    let mut spans = vec![
        Span::styled(mark, Style::default().fg(Color::Magenta)),
        Span::styled(task.title.clone(), style),
    ];
    if let Some(due) = task.due_date
        && !task.completed
    {
        let color = if overdue { Color::Red } else { Color::DarkGray };
        spans.push(Span::styled(
            format!("  {}", due_label(due, now)),
            Style::default().fg(color).italic(),
        ));
    }

    ListItem::new(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_due_label() {
        let now = Local.with_ymd_and_hms(2026, 10, 31, 20, 0, 0).unwrap();
        assert_eq!(due_label(now + Duration::hours(3), now), "due 3h");
        assert_eq!(due_label(now + Duration::minutes(45), now), "due 45m");
        assert_eq!(due_label(now - Duration::minutes(10), now), "late");
        assert_eq!(due_label(now - Duration::hours(2), now), "2h late");
    }
}
