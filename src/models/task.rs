use chrono::{DateTime, Local};
use std::fmt;

/// Unique task identifier of the form `task-<n>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("task-{}", seq))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A to-do item on the dashboard
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Local>,
    pub due_date: Option<DateTime<Local>>,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            created_at,
            due_date: None,
        }
    }

    /// Whether the task has a due date that has already passed
    pub fn is_overdue(&self, now: DateTime<Local>) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }
}

/// The three tasks every fresh dashboard starts with
pub fn seed_tasks(now: DateTime<Local>) -> Vec<Task> {
    let mut done = Task::new(TaskId::from_sequence(3), "Decipher the ancient manuscript", now);
    done.completed = true;
    vec![
        Task::new(TaskId::from_sequence(1), "Investigate the old manor", now),
        Task::new(TaskId::from_sequence(2), "Gather ingredients for the ritual", now),
        done,
    ]
}
