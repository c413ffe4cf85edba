mod news;
mod sound;
mod task;
mod theme;
mod weather;

pub use news::{NewsCategory, NewsItem, format_age, seed_news};
pub use sound::SoundKind;
pub use task::{Task, TaskId, seed_tasks};
pub use theme::{ActivityLevel, RandomEventKind, TimeOfDay};
pub use weather::{WeatherCondition, WeatherData};
