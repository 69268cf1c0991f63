use aiclub_core::{data::query_roster, settings::Settings};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
mod logging;
mod ui;
use ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    };
    match logging::init(&settings) {
        Ok(path) => tracing::info!(log = %path.display(), theme = ?settings.theme, "starting"),
        Err(e) => eprintln!("Warning: {:#}. Logging disabled.", e),
    }

    // Resolve the roster before taking over the terminal so a bad key is
    // reported on a normal screen.
    let roster = query_roster(&settings.roster_query)?;

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, roster);

    let result = app.run(&mut terminal).await;

    restore_terminal(&mut terminal)?;
    match &result {
        Ok(()) => tracing::info!("exited"),
        Err(err) => tracing::error!(%err, "exited with error"),
    }

    result
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
