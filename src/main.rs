//! toolmarks: a terminal bookmark manager for AI tools.
//!
//! Entry point: loads the configuration, sets up logging, opens the store
//! and runs a read-render loop over stdin.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use toolmarks::app::{App, Flow};
use toolmarks::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

fn main() -> ExitCode {
    let mut settings = SettingsEngine::new(None);
    // On failure the engine keeps its defaults.
    let load_error = settings.load().err();

    let level = settings.get_config().log_level.clone();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&level))
        .format_timestamp_millis()
        .init();

    if let Some(e) = load_error {
        log::warn!("{} ({}), using defaults", e, settings.config_path().display());
    }

    let mut app = match App::open(settings) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("toolmarks: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&mut app) {
        log::error!("Terminal I/O failed: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run<S: toolmarks::database::KeyValueStore>(app: &mut App<S>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", app.render())?;
    prompt(&mut stdout, app)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if app.handle_line(&line) == Flow::Quit {
            break;
        }
        writeln!(stdout, "\n{}", app.render())?;
        prompt(&mut stdout, app)?;
    }
    log::info!("Bye");
    Ok(())
}

fn prompt<S: toolmarks::database::KeyValueStore>(out: &mut impl Write, app: &App<S>) -> io::Result<()> {
    write!(out, "{}> ", app.route().path())?;
    out.flush()
}
