use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Local;
use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use rideshare::app::App;
use rideshare::config::{self, Config};
use rideshare::geocode::GeocodeClient;
use rideshare::history::EmptyHistory;
use rideshare::suggest::SuggestWorker;

/// Event poll interval; also the resolution of debounce and blur timers
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Find a ride between two cities, with place suggestions as you type
#[derive(Parser, Debug)]
#[command(name = "rideshare")]
#[command(version)]
#[command(about = "Terminal ride search with live place suggestions")]
struct Args {
    /// Path to configuration file (default: ~/.config/rideshare/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prefill the pickup location
    #[arg(long, value_name = "PLACE")]
    from: Option<String>,

    /// Prefill the destination
    #[arg(long, value_name = "PLACE")]
    to: Option<String>,

    /// Prefill the travel date
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Prefill the passenger count
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(i64).range(1..1000))]
    passengers: Option<i64>,

    /// Restrict suggestions to this country code
    #[arg(long, value_name = "CODE")]
    country: Option<String>,

    /// Geocoder search endpoint
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Run without place suggestions
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let config = load_config(&args)?;

    let worker = if args.offline {
        None
    } else {
        let client = GeocodeClient::new(config.geocoder.clone())?;
        Some(SuggestWorker::spawn(client)?)
    };

    let mut app = App::new(&config, worker, Box::new(EmptyHistory));
    prefill(&mut app, &args);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|()| run(terminal, &mut app));

    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

/// File logging for debug builds; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("rideshare.log");
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };

    if let Some(country) = &args.country {
        config.geocoder.country_code = country.clone();
    }
    if let Some(endpoint) = &args.endpoint {
        config.geocoder.endpoint = endpoint.clone();
    }
    Ok(config)
}

/// Apply prefilled values the way a picked suggestion would be
fn prefill(app: &mut App, args: &Args) {
    if let Some(from) = &args.from {
        app.form.origin.select(from);
    }
    if let Some(to) = &args.to {
        app.form.destination.select(to);
    }
    if let Some(date) = &args.date {
        app.form.set_date(date);
    }
    if let Some(passengers) = args.passengers {
        app.form.set_passengers(passengers);
    }
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now(), Local::now().date_naive());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
