use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{DefaultTerminal, Frame, widgets::ListState};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::audio::{AudioSink, SoundEffects, TerminalBell};
use crate::clock::{Clock, SystemClock};
use crate::config::{
    GHOST_CHEER_DURATION, GHOST_IDLE_DELAY, GHOST_STARE_DURATION, GHOST_STREAK_THRESHOLD,
    THUNDER_DELAY, TICK_RATE, VOLUME_STEP, seed_from_env,
};
use crate::event::{AppEvent, poll_event};
use crate::models::{ActivityLevel, SoundKind, TaskId, WeatherCondition};
use crate::store::{
    DashboardEvent, DashboardStore, SoundEvent, SoundStore, SubscriptionId, ThemeEvent,
    ThemeStore,
};
use crate::timer::{EventScheduler, TimerHandle, TimerManager};
use crate::ui::render_dashboard;
use crate::validation::parse_due_hours;

/// Which widget has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Tasks,
    Weather,
    News,
}

impl Panel {
    pub fn next(&self) -> Self {
        match self {
            Panel::Tasks => Panel::Weather,
            Panel::Weather => Panel::News,
            Panel::News => Panel::Tasks,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Panel::Tasks => Panel::News,
            Panel::Weather => Panel::Tasks,
            Panel::News => Panel::Weather,
        }
    }
}

/// The current modal state - only one modal can be open at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    AddTask,
}

/// Which field of the add-task modal receives typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Title,
    DueHours,
}

/// UI-side cues that trail store changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueTimer {
    /// The ghost peeks in after the dashboard has gone idle
    GhostStare,
    GhostHide,
    /// Thunder follows a stormy forecast
    Thunder,
}

/// A store change waiting to be reacted to
#[derive(Debug, Clone, PartialEq)]
enum Signal {
    Dashboard(DashboardEvent),
    Theme(ThemeEvent),
    Sound(SoundEvent),
}

type Inbox = Rc<RefCell<Vec<Signal>>>;

/// The app's listeners on each store, dropped on unmount
#[derive(Debug, Clone, Copy)]
struct Subscriptions {
    dashboard: SubscriptionId,
    theme: SubscriptionId,
    sound: SubscriptionId,
}

pub const GHOST_CHEER: &str = "Well done, mortal...";
pub const GHOST_STARE: &str = "I see you...";

/// The main application state
pub struct App {
    pub running: bool,
    pub focus: Panel,
    pub modal: ModalState,
    pub input_field: InputField,
    pub input_title: String,
    pub input_due: String,
    pub task_state: ListState,
    pub news_state: ListState,

    pub dashboard: DashboardStore,
    pub theme: ThemeStore,
    pub sound: SoundStore,

    /// When the active random event started, for animating it
    pub event_started: Option<Instant>,
    pub frame_count: u64,

    /// Ghost message, shown while its hide timer is the live one
    ghost: Option<(&'static str, TimerHandle<CueTimer>)>,
    overdue_seen: usize,
    scheduler: EventScheduler,
    cues: TimerManager<CueTimer>,
    audio: SoundEffects<Box<dyn AudioSink>>,
    clock: Arc<dyn Clock>,
    inbox: Inbox,
    subscriptions: Subscriptions,
}

impl App {
    /// Create the application with the system clock and the terminal bell
    pub fn new() -> color_eyre::Result<Self> {
        let seed = seed_from_env()?;
        if let Some(seed) = seed {
            info!("seeding random sources with {}", seed);
        }
        Ok(Self::build(
            Arc::new(SystemClock),
            Box::new(TerminalBell::new()),
            seed,
        ))
    }

    /// Wire the stores together and mount the scheduler
    pub fn build(clock: Arc<dyn Clock>, sink: Box<dyn AudioSink>, seed: Option<u64>) -> Self {
        let (dashboard_rng, scheduler_rng) = match seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_entropy(), StdRng::from_entropy()),
        };

        let inbox: Inbox = Rc::default();
        let mut dashboard = DashboardStore::new(clock.now_datetime(), dashboard_rng);
        let mut theme = ThemeStore::new(clock.hour(), clock.instant());
        let mut sound = SoundStore::new();

        let sink_in = Rc::clone(&inbox);
        let dashboard_sub =
            dashboard.subscribe(move |e| sink_in.borrow_mut().push(Signal::Dashboard(e.clone())));
        let sink_in = Rc::clone(&inbox);
        let theme_sub = theme.subscribe(move |e| sink_in.borrow_mut().push(Signal::Theme(*e)));
        let sink_in = Rc::clone(&inbox);
        let sound_sub = sound.subscribe(move |e| sink_in.borrow_mut().push(Signal::Sound(*e)));

        let mut task_state = ListState::default();
        task_state.select(Some(0));
        let mut news_state = ListState::default();
        news_state.select(Some(0));

        let mut app = Self {
            running: false,
            focus: Panel::Tasks,
            modal: ModalState::None,
            input_field: InputField::Title,
            input_title: String::new(),
            input_due: String::new(),
            task_state,
            news_state,
            dashboard,
            theme,
            sound,
            event_started: None,
            frame_count: 0,
            ghost: None,
            overdue_seen: 0,
            scheduler: EventScheduler::new(scheduler_rng),
            cues: TimerManager::new(),
            audio: SoundEffects::new(sink),
            clock,
            inbox,
            subscriptions: Subscriptions {
                dashboard: dashboard_sub,
                theme: theme_sub,
                sound: sound_sub,
            },
        };
        app.mount();
        app
    }

    /// Start every timer. The dashboard starts idle, so the ghost is queued too.
    fn mount(&mut self) {
        let now = self.clock.instant();
        self.scheduler.mount(&mut self.theme, now, self.clock.hour());
        self.audio.sync_global(&self.sound);
        if self.theme.activity_level() == ActivityLevel::Idle {
            self.cues.schedule(CueTimer::GhostStare, now, GHOST_IDLE_DELAY);
        }
        // The first forecast gets its thunder too
        if self.dashboard.weather().condition == WeatherCondition::Stormy {
            self.cues.schedule(CueTimer::Thunder, now, THUNDER_DELAY);
        }
        self.dispatch_signals();
    }

    /// Tear down every timer and stop listening to the stores
    pub fn unmount(&mut self) {
        self.scheduler.unmount();
        self.cues.cancel_all();
        self.dashboard.unsubscribe(self.subscriptions.dashboard);
        self.theme.unsubscribe(self.subscriptions.theme);
        self.sound.unsubscribe(self.subscriptions.sound);
        self.inbox.borrow_mut().clear();
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.scheduler.is_mounted()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Message of the ghost currently on screen
    pub fn ghost(&self) -> Option<&'static str> {
        self.ghost
            .filter(|(_, hide)| self.cues.is_current(hide))
            .map(|(message, _)| message)
    }

    /// Run the application's main loop
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            let event = poll_event(self.poll_timeout())?;
            self.step(event);
        }

        self.unmount();
        Ok(())
    }

    /// Handle one polled event, then fire whatever timers came due.
    ///
    /// Timers advance after every event, so a stream of key repeats cannot
    /// hold them back.
    pub fn step(&mut self, event: Option<AppEvent>) {
        if let Some(AppEvent::Key(key)) = event {
            self.handle_key_event(key);
        }
        self.handle_tick();
    }

    /// Wait no longer than the tick rate or the nearest pending deadline
    fn poll_timeout(&self) -> Duration {
        let now = self.clock.instant();
        [self.scheduler.timers().next_deadline(), self.cues.next_deadline()]
            .into_iter()
            .flatten()
            .map(|deadline| deadline.saturating_duration_since(now))
            .fold(TICK_RATE, Duration::min)
    }

    fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);
        render_dashboard(frame, self);
    }

    /// Handle a key event. Every key press counts as an interaction.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.theme.record_interaction(self.clock.instant());

        match self.modal {
            ModalState::AddTask => self.handle_add_task_key(key),
            ModalState::None => self.handle_dashboard_key(key),
        }

        self.dispatch_signals();
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        // Global keys
        match (key.modifiers, key.code) {
            (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => self.quit(),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => self.quit(),
            (_, KeyCode::Tab) => self.focus = self.focus.next(),
            (_, KeyCode::BackTab) => self.focus = self.focus.prev(),
            (_, KeyCode::Char('l')) => self.click_logo(),
            (_, KeyCode::Char('m')) => {
                self.play(SoundKind::Click);
                self.sound.toggle_mute();
            }
            (_, KeyCode::Char('b')) => {
                self.play(SoundKind::Click);
                self.audio.toggle_ambient(&mut self.sound);
            }
            (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) => {
                self.sound.set_master_volume(self.sound.master_volume() + VOLUME_STEP);
            }
            (_, KeyCode::Char('-')) => {
                self.sound.set_master_volume(self.sound.master_volume() - VOLUME_STEP);
            }
            (_, KeyCode::Char(']')) => {
                self.sound.set_effects_volume(self.sound.effects_volume() + VOLUME_STEP);
            }
            (_, KeyCode::Char('[')) => {
                self.sound.set_effects_volume(self.sound.effects_volume() - VOLUME_STEP);
            }
            (_, KeyCode::Char('}')) => {
                self.sound.set_ambient_volume(self.sound.ambient_volume() + VOLUME_STEP);
            }
            (_, KeyCode::Char('{')) => {
                self.sound.set_ambient_volume(self.sound.ambient_volume() - VOLUME_STEP);
            }
            (_, KeyCode::Char('r')) => self.refresh_weather(),
            _ => match self.focus {
                Panel::Tasks => self.handle_tasks_key(key),
                Panel::News => self.handle_news_key(key),
                Panel::Weather => {}
            },
        }
    }

    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                select_next(&mut self.task_state, self.dashboard.tasks().len());
                self.play(SoundKind::Hover);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                select_prev(&mut self.task_state, self.dashboard.tasks().len());
                self.play(SoundKind::Hover);
            }
            KeyCode::Char('a') | KeyCode::Char('n') => {
                self.modal = ModalState::AddTask;
                self.input_field = InputField::Title;
                self.input_title.clear();
                self.input_due.clear();
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected_task(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected_task(),
            _ => {}
        }
    }

    fn handle_news_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                select_next(&mut self.news_state, self.dashboard.news().len());
                self.play(SoundKind::Hover);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                select_prev(&mut self.news_state, self.dashboard.news().len());
                self.play(SoundKind::Hover);
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.read_selected_news(),
            _ => {}
        }
    }

    fn handle_add_task_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.modal = ModalState::None;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.input_field = match self.input_field {
                    InputField::Title => InputField::DueHours,
                    InputField::DueHours => InputField::Title,
                };
            }
            KeyCode::Enter => self.submit_task(),
            KeyCode::Backspace => {
                match self.input_field {
                    InputField::Title => self.input_title.pop(),
                    InputField::DueHours => self.input_due.pop(),
                };
            }
            KeyCode::Char(c) => match self.input_field {
                InputField::Title => self.input_title.push(c),
                InputField::DueHours if c.is_ascii_digit() => self.input_due.push(c),
                InputField::DueHours => {}
            },
            _ => {}
        }
    }

    fn submit_task(&mut self) {
        let Ok(due_hours) = parse_due_hours(&self.input_due) else {
            self.play(SoundKind::Error);
            return;
        };
        let now = self.clock.now_datetime();
        let due_date = due_hours.map(|hours| now + chrono::Duration::hours(i64::from(hours)));

        if self.dashboard.add_task(&self.input_title, now, due_date).is_some() {
            self.play(SoundKind::Click);
            self.task_state.select(Some(0));
            self.modal = ModalState::None;
        } else {
            self.play(SoundKind::Error);
        }
    }

    fn selected_task_id(&self) -> Option<TaskId> {
        self.task_state
            .selected()
            .and_then(|i| self.dashboard.tasks().get(i))
            .map(|t| t.id.clone())
    }

    fn toggle_selected_task(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };

        self.dashboard.toggle_task(&id);
        let completed = self.dashboard.task(&id).is_some_and(|t| t.completed);
        self.play(if completed {
            SoundKind::Complete
        } else {
            SoundKind::Click
        });
    }

    fn delete_selected_task(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };

        self.play(SoundKind::Click);
        self.dashboard.delete_task(&id);

        let len = self.dashboard.tasks().len();
        if len == 0 {
            self.task_state.select(None);
        } else if let Some(i) = self.task_state.selected()
            && i >= len
        {
            self.task_state.select(Some(len - 1));
        }
    }

    fn read_selected_news(&mut self) {
        let Some(id) = self
            .news_state
            .selected()
            .and_then(|i| self.dashboard.news().get(i))
            .map(|n| n.id.clone())
        else {
            return;
        };

        let was_read = self.dashboard.news_item(&id).is_some_and(|n| n.is_read);
        self.play(if was_read {
            SoundKind::Click
        } else {
            SoundKind::Notification
        });
        self.dashboard.mark_news_read(&id);
    }

    fn refresh_weather(&mut self) {
        self.play(SoundKind::Click);
        self.dashboard.update_weather();
    }

    fn click_logo(&mut self) {
        self.play(SoundKind::Click);
        let now = self.clock.instant();
        self.scheduler.click_logo(&mut self.theme, now);
    }

    /// Advance every timer against the clock
    pub fn handle_tick(&mut self) {
        self.scheduler.tick(&mut self.theme, self.clock.as_ref());

        let now = self.clock.instant();
        for cue in self.cues.take_due(now) {
            match cue {
                CueTimer::GhostStare => self.show_ghost(GHOST_STARE, GHOST_STARE_DURATION),
                CueTimer::GhostHide => self.ghost = None,
                CueTimer::Thunder => self.play(SoundKind::Thunder),
            }
        }

        // Alert once for each task that newly slipped past its due date
        let overdue = self.dashboard.overdue_count(self.clock.now_datetime());
        if overdue > self.overdue_seen {
            self.play(SoundKind::Alert);
        }
        self.overdue_seen = overdue;

        self.dispatch_signals();
    }

    pub(crate) fn show_ghost(&mut self, message: &'static str, duration: Duration) {
        let now = self.clock.instant();
        let hide = self.cues.schedule(CueTimer::GhostHide, now, duration);
        self.ghost = Some((message, hide));
    }

    fn play(&mut self, kind: SoundKind) {
        self.audio.play(&self.sound, kind);
    }

    /// React to store changes until no new ones arrive
    fn dispatch_signals(&mut self) {
        loop {
            let batch = std::mem::take(&mut *self.inbox.borrow_mut());
            if batch.is_empty() {
                break;
            }
            for signal in batch {
                self.on_signal(signal);
            }
        }
    }

    fn on_signal(&mut self, signal: Signal) {
        let now = self.clock.instant();
        match signal {
            Signal::Theme(ThemeEvent::RandomEventStarted(kind)) => {
                self.event_started = Some(now);
                if let Some(sound) = SoundKind::for_event(kind) {
                    self.play(sound);
                }
            }
            Signal::Theme(ThemeEvent::RandomEventCleared) => self.event_started = None,
            Signal::Theme(ThemeEvent::JumpScareStarted) => self.play(SoundKind::Jumpscare),
            Signal::Theme(ThemeEvent::ActivityChanged(level)) => match level {
                ActivityLevel::Idle => {
                    self.cues.schedule(CueTimer::GhostStare, now, GHOST_IDLE_DELAY);
                }
                ActivityLevel::Active => {
                    self.cues.cancel(CueTimer::GhostStare);
                }
                ActivityLevel::Hyperactive => {
                    self.cues.cancel(CueTimer::GhostStare);
                    self.play(SoundKind::Heartbeat);
                }
            },
            Signal::Dashboard(DashboardEvent::StreakChanged(streak))
                if streak >= GHOST_STREAK_THRESHOLD =>
            {
                self.show_ghost(GHOST_CHEER, GHOST_CHEER_DURATION);
                self.play(SoundKind::Complete);
            }
            Signal::Dashboard(DashboardEvent::WeatherUpdated { previous, weather }) => {
                if weather.condition != WeatherCondition::Stormy {
                    self.cues.cancel(CueTimer::Thunder);
                } else if previous != WeatherCondition::Stormy {
                    self.cues.schedule(CueTimer::Thunder, now, THUNDER_DELAY);
                }
            }
            Signal::Sound(SoundEvent::MasterVolume(_)) => {
                self.audio.sync_global(&self.sound);
                self.audio.sync_ambient(&self.sound);
            }
            Signal::Sound(SoundEvent::Muted(_)) => self.audio.sync_global(&self.sound),
            Signal::Sound(SoundEvent::AmbientVolume(_)) => self.audio.sync_ambient(&self.sound),
            // A click at the new level
            Signal::Sound(SoundEvent::EffectsVolume(_)) => self.play(SoundKind::Click),
            Signal::Sound(SoundEvent::AmbientPlaying(playing)) => {
                info!("ambient {}", if playing { "on" } else { "off" });
            }
            _ => {}
        }
    }

    /// Quit the application
    fn quit(&mut self) {
        self.running = false;
    }
}

fn select_next(state: &mut ListState, len: usize) {
    if len > 0 {
        let i = state.selected().map(|i| (i + 1) % len);
        state.select(i.or(Some(0)));
    }
}

fn select_prev(state: &mut ListState, len: usize) {
    if len > 0 {
        let i = state
            .selected()
            .map(|i| if i == 0 { len - 1 } else { i - 1 });
        state.select(i.or(Some(0)));
    }
}
