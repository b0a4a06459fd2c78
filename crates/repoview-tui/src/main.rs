//! repoview: a terminal explorer for one GitHub repository, built with ratatui.
//!
//! This binary loads the configuration, initialises the terminal, runs the
//! main event loop, and restores the terminal on exit or panic.

mod app;
mod background;
mod icons;
mod image_preview;
mod input;
mod render;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use repoview_core::view::status::Preview;
use repoview_core::{Config, GitHubContents, ListingClient, Navigator};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::app::{App, AppMode};
use crate::background::{spawn_image, spawn_listings, FetchMessage};
use crate::image_preview::ImagePreviewState;
use crate::input::{handle_key, InputAction};
use crate::render::render;

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Loads the first config file found, then applies `REPOVIEW_*` overrides.
///
/// A malformed file is reported on stderr and the defaults are used.
fn load_config() -> Config {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let config = match Config::discover(&Config::search_paths(home.as_deref())) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("repoview: ignoring config: {e}");
            Config::default()
        }
    };
    config.with_env(|name| std::env::var(name).ok())
}

/// Logs to a file so the terminal surface is not disturbed.
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config();
    if let Err(e) = init_tracing(&config) {
        eprintln!("repoview: logging disabled: {e}");
    }
    tracing::info!(repository = %config.repository.label(), "starting");

    let github = Arc::new(GitHubContents::new(&config.repository, &config.api)?);

    install_panic_hook();

    let mut terminal = setup_terminal()?;

    // Picker must be created after alternate screen (raw mode) but before event loop
    let picker = if config.preview.images {
        match ratatui_image::picker::Picker::from_query_stdio() {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!("Terminal image protocol detection failed: {e}");
                None
            }
        }
    } else {
        None
    };

    let result = run_app(&mut terminal, &config, github, picker).await;

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    github: Arc<GitHubContents>,
    picker: Option<ratatui_image::picker::Picker>,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchMessage>();

    let navigator = Navigator::new(ListingClient::new(github.clone()));
    let source = navigator.client().source();
    let mut app = App::new(navigator, config);
    let mut image_state = picker.map(ImagePreviewState::new);

    loop {
        // 1. Drain finished fetches
        while let Ok(msg) = rx.try_recv() {
            match msg {
                FetchMessage::Listing { path, result } => {
                    app = app.complete_listing(&path, result);
                }
                FetchMessage::Image { url, result } => {
                    if let Some(state) = image_state.as_mut() {
                        match result {
                            Ok(bytes) => state.finish(&url, &bytes),
                            Err(e) => {
                                tracing::warn!(url = %url, "image download failed: {e}");
                                state.fail(&url, e.to_string());
                            }
                        }
                    }
                }
            }
        }

        // 2. Start whatever the current state still needs
        spawn_listings(&source, app.take_requests(), &tx);
        if let Some(state) = image_state.as_mut() {
            if let Preview::File {
                url: Some(url),
                image: true,
                ..
            } = Preview::project(&app.snapshot())
            {
                if state.begin(&url) {
                    spawn_image(&github, url, app.preview_config().max_image_bytes, &tx);
                }
            }
        }

        // 3. Render
        terminal.draw(|f| render(f, &app, image_state.as_mut()))?;

        if app.should_quit() {
            break;
        }

        // 4. Poll for crossterm events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app = match handle_key(key, app.mode(), app.keymap()) {
                    InputAction::Action(action) => app.with_clear_status().handle_action(action),
                    InputAction::EnterNormal => app.with_mode(AppMode::Normal),
                    InputAction::SearchChar(c) => app.search_push_char(c),
                    InputAction::SearchBackspace => app.search_pop_char(),
                    InputAction::SearchConfirm => app.search_confirm(),
                    InputAction::SearchCancel => app.search_cancel(),
                    InputAction::Quit => app.with_quit(),
                    InputAction::None => app,
                };
            }
        }
    }

    Ok(())
}
