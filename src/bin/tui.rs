use std::error::Error;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;

use claire_demo::config::Config;
use claire_demo::logging::init_logging;
use claire_demo::script::{ChatMode, PolicyId};
use claire_demo::tui::{ui::try_init_tui, App, DemoEvent, EventHandler};

/// Player tick cadence (50ms = 20Hz)
const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Conversation mode to open with
    #[arg(short, long, value_enum)]
    mode: Option<ChatMode>,

    /// Policy the conversation pertains to (defaults to "gl")
    #[arg(short, long, value_enum)]
    policy: Option<PolicyId>,

    /// Disable the log file
    #[arg(long)]
    no_log_file: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Missing config is fine; the demo must start instantly with defaults.
    let config = Config::load().unwrap_or_default();

    // The TUI owns the terminal, so logs go to a file only.
    let _guard = init_logging("tui", config.logging.file && !cli.no_log_file, false)?;

    let mode = cli.mode.unwrap_or(config.demo.mode);
    let policy = cli.policy.or(config.demo.policy);

    info!(%mode, "Starting Claire demo");

    let today = chrono::Local::now().date_naive();
    let mut app = App::new(mode, policy, config.timing.clone(), today, Instant::now());

    let mut tui = try_init_tui()?;

    let (handler, mut rx) = EventHandler::new();
    handler.start(TICK_INTERVAL).await;

    tui.draw(&app)?;

    while let Some(event) = rx.recv().await {
        match event {
            DemoEvent::Quit => app.should_quit = true,
            DemoEvent::Key(key) => app.handle_key(key, Instant::now()),
            DemoEvent::Tick => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }

        tui.draw(&app)?;
    }

    info!("Claire demo exited");

    Ok(())
}
