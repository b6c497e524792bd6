//! # base-personality-quiz
//!
//! A terminal quiz that connects a wallet, asks eight questions about
//! onchain habits and maps the total to one of five personalities.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use personality_quiz::{Config, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = Config {
//!         wallet_url: Some("ws://127.0.0.1:8546".to_string()),
//!         ..Config::default()
//!     };
//!
//!     // Connects to the wallet bridge, then takes over the terminal
//!     Quiz::from_config(config).await.run().await
//! }
//! ```

mod app;
pub mod clipboard;
pub mod config;
pub mod connect;
pub mod data;
pub mod mint;
pub mod models;
pub mod protocol;
pub mod quiz;
pub mod results;
pub mod route;
pub mod terminal;
mod ui;
pub mod wallet;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{info, warn};

pub use app::{App, ConnectScreen, Effect, Notice, NoticeKind, QuizScreen, ResultsScreen, Screen};
pub use clipboard::{Clipboard, Osc52Clipboard};
pub use config::Config;
pub use connect::{Connection, Environment};
pub use route::Route;
pub use wallet::{JsonRpcProvider, WalletError, WalletProvider};

/// How long the event loop waits for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result of wallet work finished in the background.
enum Outcome {
    Connected(Result<Connection, WalletError>),
    Minted(Result<String, WalletError>),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
    env: Environment,
    provider: Option<Arc<dyn WalletProvider>>,
    clipboard: Box<dyn Clipboard>,
}

impl Quiz {
    /// Create a quiz with an explicit wallet provider, or none.
    pub fn new(config: &Config, provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            app: App::new(config.route, config.app_url.clone(), Instant::now()),
            env: config.environment(),
            provider,
            clipboard: Box::new(Osc52Clipboard),
        }
    }

    /// Create a quiz, connecting to the configured wallet bridge.
    ///
    /// A bridge that cannot be reached is logged and treated as absent; the
    /// player then sees the missing-wallet notice when connecting.
    pub async fn from_config(config: Config) -> Self {
        let provider: Option<Arc<dyn WalletProvider>> = match &config.wallet_url {
            Some(url) => match JsonRpcProvider::connect(url).await {
                Ok(provider) => Some(Arc::new(provider)),
                Err(e) => {
                    warn!(url = %url, error = %e, "wallet bridge unavailable");
                    None
                }
            },
            None => None,
        };

        Self::new(&config, provider)
    }

    /// Replace the clipboard used for sharing.
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        info!(route = %self.app.route(), preview = self.env.preview, "starting quiz");
        let mut term = terminal::init()?;
        let result = self.run_event_loop(&mut term).await;
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    async fn run_event_loop(&mut self, terminal: &mut terminal::AppTerminal) -> Result<(), QuizError> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

        loop {
            while let Ok(outcome) = rx.try_recv() {
                self.apply(outcome);
            }

            let now = Instant::now();
            self.app.tick(now);
            if self.app.should_quit {
                break;
            }

            terminal.draw(|frame| ui::render(frame, &self.app, now))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    if let Some(effect) = handle_input(&mut self.app, key.code) {
                        self.spawn(effect, &tx);
                    }
                }
            }

            // Let finished wallet tasks report before the next frame.
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    fn spawn(&self, effect: Effect, tx: &mpsc::UnboundedSender<Outcome>) {
        let provider = self.provider.clone();
        let tx = tx.clone();

        match effect {
            Effect::Connect => {
                let env = self.env;
                tokio::spawn(async move {
                    let result = connect::connect_wallet(provider.as_deref(), env).await;
                    let _ = tx.send(Outcome::Connected(result));
                });
            }
            Effect::Mint => {
                tokio::spawn(async move {
                    let result = mint::send_mint(provider.as_deref()).await;
                    let _ = tx.send(Outcome::Minted(result));
                });
            }
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Connected(result) => self.app.finish_connect(result, Instant::now()),
            Outcome::Minted(result) => self.app.finish_mint(result, &*self.clipboard),
        }
    }
}

/// Maps a key press to an app action. Returns wallet work to start, if any.
fn handle_input(app: &mut App, key: KeyCode) -> Option<Effect> {
    if app.notice().is_some() {
        if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_notice();
        }
        return None;
    }

    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.should_quit = true;
        return None;
    }

    match app.screen {
        Screen::Connect(_) => handle_connect_input(app, key),
        Screen::Quiz(_) => {
            handle_quiz_input(app, key);
            None
        }
        Screen::Results(_) => handle_results_input(app, key),
    }
}

fn handle_connect_input(app: &mut App, key: KeyCode) -> Option<Effect> {
    match key {
        KeyCode::Enter => app.request_connect(),
        _ => None,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char(' ') => app.select_highlighted(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.select_option(index);
        }
        KeyCode::Enter => app.advance(Instant::now()),
        _ => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) -> Option<Effect> {
    match key {
        KeyCode::Char('m') | KeyCode::Char('M') => app.request_mint(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.take_again(Instant::now());
            None
        }
        _ => None,
    }
}
