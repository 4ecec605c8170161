use anyhow::{Context, Result};
use clap::Parser;
use lulu::app::App;
use lulu::cli::{print_error, Cli, LOG_FILE_NAME};
use lulu::styles::{init_theme, ThemeType};
use lulu::utils::{get_config_path, get_log_dir};
use lulu::Config;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::event::DisableBracketedPaste,
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));
}

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join(LOG_FILE_NAME);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // The TUI owns stdout from here on.
    eprintln!("Logs are being written to: {}", log_file.display());

    let config_path = get_config_path();
    let config = Config::load_or_create(&config_path).context("Failed to load configuration")?;
    let theme = if cli.no_colors {
        ThemeType::NoColor
    } else {
        config.effective_theme()
    };
    init_theme(theme);

    let mut app = App::new(cli.start, config, config_path)?;
    let result = app.run();

    drop(guard);
    result
}
