use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use tslaunch::app::{handler::Services, r#loop::run_loop, state::AppState};
use tslaunch::cli::{print_once, report_panel_error, Cli};
use tslaunch::config::{ConfigLoader, Preferences, TomlConfigLoader};
use tslaunch::infrastructure::{clipboard::SystemClipboard, invoker::ProcessInvoker};
use tslaunch::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print {
        logging::init_stderr()?;
    } else if let Some(path) = logging::default_log_path() {
        if let Err(e) = logging::init_file(&path) {
            eprintln!("Logging disabled: {e:#}");
        }
    }

    let loader = Arc::new(
        TomlConfigLoader::new(cli.config_path()?).with_binary_override(cli.binary.clone()),
    );
    let invoker = Arc::new(ProcessInvoker::new(loader.clone()));

    // A broken file surfaces as a configuration error on the first query.
    let prefs = loader.load().unwrap_or_else(|e| {
        tracing::warn!(error = %format!("{e:#}"), "using default preferences");
        Preferences::default()
    });

    if cli.print {
        let mut stdout = io::stdout().lock();
        return print_once(invoker.as_ref(), &prefs, cli.query.as_deref(), &mut stdout).await;
    }

    tracing::info!(config = %loader.location().display(), "starting panel");

    let services = Services {
        resolver: invoker,
        clipboard: Arc::new(SystemClipboard::default()),
        config: loader,
    };
    let app_state = AppState::new(prefs).with_search(cli.query.as_deref().unwrap_or_default());

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %format!("{err:#}"), "panel exited with an error");
        report_panel_error(&err, &mut io::stderr().lock());
    }

    Ok(())
}
