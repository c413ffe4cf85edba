use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Application events
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// The poll timed out without input
    Tick,
    /// The terminal was resized; the next draw picks up the new size
    Resize,
}

/// Poll for events with a timeout.
///
/// Returns `Some(AppEvent)` if an event occurred, or `None` for input the
/// dashboard ignores (mouse, focus, paste, key releases).
pub fn poll_event(timeout: Duration) -> color_eyre::Result<Option<AppEvent>> {
    if !event::poll(timeout)? {
        return Ok(Some(AppEvent::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
        Event::Resize(_, _) => Ok(Some(AppEvent::Resize)),
        _ => Ok(None),
    }
}
