use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rag_console::admin::MatchCase;
use rag_console::ui::{install_panic_hook, Screen};
use rag_console::{util, App, Config};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScreenArg {
    Admin,
    Chat,
}

impl From<ScreenArg> for Screen {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Admin => Screen::Admin,
            ScreenArg::Chat => Screen::Chat,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rag-console", version)]
#[command(about = "Terminal admin dashboard and chat console for a RAG assistant")]
struct Args {
    /// Screen to open at startup
    #[arg(value_enum)]
    screen: Option<ScreenArg>,

    /// Config file (default: <data-dir>/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Data directory for config and logs (default: ~/.rag-console)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Delay before the simulated reply, in milliseconds
    #[arg(long)]
    response_delay_ms: Option<u64>,

    /// Give up on a reply after this many milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    response_timeout_ms: Option<u64>,

    /// Match search filters case-sensitively
    #[arg(long)]
    case_sensitive: bool,
}

impl Args {
    /// Flags win over file values
    fn apply(&self, config: &mut Config) {
        if let Some(screen) = self.screen {
            config.default_screen = screen.into();
        }
        if let Some(delay) = self.response_delay_ms {
            config.chat.response_delay_ms = delay;
        }
        if let Some(timeout) = self.response_timeout_ms {
            config.chat.response_timeout_ms = Some(timeout);
        }
        if self.case_sensitive {
            config.admin.match_case = MatchCase::Sensitive;
        }
    }
}

fn init_logging() -> Result<()> {
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    util::init_data_dir(args.data_dir.clone());
    init_logging()?;

    // Config errors are reported before the terminal is taken over
    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load config");
            eprintln!("rag-console: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    args.apply(&mut config);
    tracing::info!(screen = %config.default_screen, "Starting rag-console");

    install_panic_hook();
    let mut app = App::new(config);
    app.run().await?;
    Ok(ExitCode::SUCCESS)
}
