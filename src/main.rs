// BubbleTTY: step-by-step bubble sort visualizer

use std::io;
use std::path::PathBuf;

use bubbletty::config::{parse_values, Settings};
use bubbletty::driver::TraceObserver;
use bubbletty::error::{AppError, ConfigError};
use bubbletty::logging::{init_file_logging, init_stderr_logging};
use bubbletty::state::format_array;
use bubbletty::ui::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::{Builder, Runtime};

#[derive(Parser, Debug)]
#[command(version, about = "Watch bubble sort run one comparison at a time")]
struct Cli {
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated values to sort, e.g. 30,80,45
    #[arg(long)]
    values: Option<String>,

    /// Initial speed (higher is faster)
    #[arg(long)]
    speed: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run one sort without the TUI and print each step
    #[arg(long)]
    headless: bool,
}

fn load_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(raw) = &cli.values {
        settings.values = parse_values(raw)?;
    }
    if let Some(speed) = cli.speed {
        settings.speed.initial = speed;
    }
    if let Some(path) = &cli.log_file {
        settings.log_file = Some(path.clone());
    }
    settings.validate()?;
    Ok(settings)
}

fn run_headless(runtime: &Runtime, settings: &Settings) -> Result<(), AppError> {
    match &settings.log_file {
        Some(path) => init_file_logging(path, &settings.log_filter)?,
        None => init_stderr_logging(&settings.log_filter)?,
    }

    let driver = settings.driver();
    let mut trace = TraceObserver::new(io::stdout());
    println!("input: {}", format_array(&settings.values));
    if let Some(sorted) = runtime.block_on(driver.run(settings.values.clone(), &mut trace)) {
        println!("sorted: {}", format_array(&sorted));
    }
    Ok(())
}

/// Run `setup`; if it fails, run `undo` before handing back the error
fn or_undo<T>(setup: impl FnOnce() -> io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    setup().map_err(|e| {
        undo();
        e
    })
}

fn run(cli: Cli, settings: Settings) -> Result<(), AppError> {
    // The driver and the UI share one thread and cooperate at await points
    let runtime = Builder::new_current_thread().enable_time().build()?;

    if cli.headless {
        return run_headless(&runtime, &settings);
    }

    if let Some(path) = &settings.log_file {
        init_file_logging(path, &settings.log_filter)?;
    }

    // Set up terminal; leave raw mode again if the rest of the setup fails
    enable_raw_mode()?;
    let mut terminal = or_undo(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )?;

    // Create and run app
    let mut app = App::new(settings.driver(), settings.values.clone());
    let res = runtime.block_on(app.run(&mut terminal));

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(AppError::from)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    run(cli, settings)?;
    Ok(())
}
