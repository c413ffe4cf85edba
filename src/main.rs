mod app;
mod audio;
mod clock;
mod config;
mod error;
mod event;
mod logging;
mod models;
mod store;
mod timer;
mod ui;
mod validation;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init_logging()?;

    let app = App::new()?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    log::info!("the dashboard sleeps");
    result
}
