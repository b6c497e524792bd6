use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use personality_quiz::config::DEFAULT_APP_URL;
use personality_quiz::{Config, Quiz, Route};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "personality-quiz.log";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// WebSocket URL of the wallet bridge (EIP-1193 JSON-RPC)
    #[arg(long, env = "QUIZ_WALLET_URL")]
    wallet_url: Option<String>,

    /// Public URL of the quiz, used in the share text
    #[arg(long, env = "QUIZ_APP_URL", default_value = DEFAULT_APP_URL)]
    app_url: String,

    /// Run without a wallet, using a placeholder account
    #[arg(long, env = "QUIZ_DEMO")]
    demo: bool,

    /// Screen to open, e.g. `/quiz` or `/results?score=27`
    #[arg(long, default_value = "/")]
    route: String,

    /// Where to write logs [default: <tmp>/personality-quiz.log]
    #[arg(long, env = "QUIZ_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME));
    if let Err(e) = init_tracing(&log_file) {
        eprintln!("Logging disabled ({}): {}", log_file.display(), e);
    }

    let config = Config {
        wallet_url: args.wallet_url,
        app_url: args.app_url,
        demo: args.demo,
        route: Route::parse(&args.route),
    };

    let quiz = Quiz::from_config(config).await;
    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
