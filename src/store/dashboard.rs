use chrono::{DateTime, Local};
use log::{debug, info};
use rand::rngs::StdRng;

use super::{SubscriptionId, Subscribers};
use crate::models::{
    NewsItem, Task, TaskId, WeatherCondition, WeatherData, seed_news, seed_tasks,
};
use crate::validation::normalize_task_title;

/// Change notifications from the dashboard store
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    TaskAdded(TaskId),
    TaskToggled { id: TaskId, completed: bool },
    TaskDeleted(TaskId),
    StreakChanged(u32),
    NewsRead(String),
    WeatherUpdated {
        previous: WeatherCondition,
        weather: WeatherData,
    },
}

/// Tasks, headlines and weather
#[derive(Debug)]
pub struct DashboardStore {
    tasks: Vec<Task>,
    news: Vec<NewsItem>,
    weather: WeatherData,
    completed_tasks_streak: u32,
    next_task_seq: u64,
    rng: StdRng,
    subscribers: Subscribers<DashboardEvent>,
}

impl DashboardStore {
    /// Create a store seeded with the starter tasks and headlines
    pub fn new(now: DateTime<Local>, mut rng: StdRng) -> Self {
        let tasks = seed_tasks(now);
        let weather = WeatherData::generate(&mut rng);
        Self {
            next_task_seq: tasks.len() as u64 + 1,
            tasks,
            news: seed_news(now),
            weather,
            completed_tasks_streak: 0,
            rng,
            subscribers: Subscribers::default(),
        }
    }

    #[cfg(test)]
    pub fn with_seed(now: DateTime<Local>, seed: u64) -> Self {
        Self::new(now, rand::SeedableRng::seed_from_u64(seed))
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&DashboardEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn news_item(&self, id: &str) -> Option<&NewsItem> {
        self.news.iter().find(|n| n.id == id)
    }

    pub fn weather(&self) -> &WeatherData {
        &self.weather
    }

    pub fn completed_tasks_streak(&self) -> u32 {
        self.completed_tasks_streak
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn all_completed(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|t| t.completed)
    }

    /// Open tasks whose due date has passed
    pub fn overdue_count(&self, now: DateTime<Local>) -> usize {
        self.tasks.iter().filter(|t| t.is_overdue(now)).count()
    }

    /// Add a task to the top of the list.
    ///
    /// The title is trimmed; blank titles are ignored and return `None`.
    pub fn add_task(
        &mut self,
        title: &str,
        now: DateTime<Local>,
        due_date: Option<DateTime<Local>>,
    ) -> Option<TaskId> {
        let title = normalize_task_title(title)?;
        let id = TaskId::from_sequence(self.next_task_seq);
        self.next_task_seq += 1;

        let mut task = Task::new(id.clone(), title, now);
        task.due_date = due_date;
        self.tasks.insert(0, task);
        info!("task added: {}", id);
        self.subscribers.emit(&DashboardEvent::TaskAdded(id.clone()));
        Some(id)
    }

    /// Flip a task's completion and recompute the streak.
    ///
    /// The streak increments when every task is complete after the toggle,
    /// otherwise it becomes the number of completed tasks.
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        let completed = task.completed;

        let previous = self.completed_tasks_streak;
        self.completed_tasks_streak = if self.all_completed() {
            previous + 1
        } else {
            self.completed_count() as u32
        };

        debug!("task {} completed={}", id, completed);
        self.subscribers.emit(&DashboardEvent::TaskToggled {
            id: id.clone(),
            completed,
        });
        if self.completed_tasks_streak != previous {
            let streak = self.completed_tasks_streak;
            self.subscribers.emit(&DashboardEvent::StreakChanged(streak));
        }
        true
    }

    /// Remove a task. The streak is left alone.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        info!("task deleted: {}", id);
        self.subscribers.emit(&DashboardEvent::TaskDeleted(id.clone()));
        true
    }

    /// Mark a headline read. Marking an already-read headline changes nothing.
    pub fn mark_news_read(&mut self, id: &str) -> bool {
        let Some(item) = self.news.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        let was_read = std::mem::replace(&mut item.is_read, true);
        if !was_read {
            self.subscribers.emit(&DashboardEvent::NewsRead(id.to_string()));
        }
        true
    }

    /// Replace the weather with a fresh independent draw
    pub fn update_weather(&mut self) -> WeatherData {
        let previous = self.weather.condition;
        self.weather = WeatherData::generate(&mut self.rng);
        debug!("weather updated: {:?}", self.weather);
        self.subscribers.emit(&DashboardEvent::WeatherUpdated {
            previous,
            weather: self.weather,
        });
        self.weather
    }
}
