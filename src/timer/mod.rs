mod manager;
mod scheduler;

pub use manager::{TimerHandle, TimerManager};
pub use scheduler::EventScheduler;
