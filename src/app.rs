use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::clipboard::Clipboard;
use crate::connect::Connection;
use crate::data::QUESTIONS;
use crate::mint;
use crate::models::PersonalityBand;
use crate::quiz::{QuizSession, SessionError, Step};
use crate::results::{Celebration, ScoreParam};
use crate::route::Route;
use crate::wallet::WalletError;

/// Pause between finishing a screen and showing the next one.
pub const NAVIGATION_DELAY: Duration = Duration::from_millis(500);

pub struct ConnectScreen {
    pub connecting: bool,
}

pub struct QuizScreen {
    pub session: QuizSession<'static>,
    /// Highlighted option; distinct from the recorded selection.
    pub cursor: usize,
}

pub struct ResultsScreen {
    pub param: ScoreParam,
    pub band: &'static PersonalityBand,
    pub sending: bool,
    pub celebration: Celebration,
}

pub enum Screen {
    Connect(ConnectScreen),
    Quiz(QuizScreen),
    Results(ResultsScreen),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Blocking message shown over the current screen until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Wallet work the event loop has to run for the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Connect,
    Mint,
}

pub struct App {
    pub screen: Screen,
    route: Route,
    app_url: String,
    wallet: Option<Connection>,
    notices: VecDeque<Notice>,
    pending_route: Option<(Instant, Route)>,
    /// Score being minted; outlives the results screen it started on.
    minting: Option<ScoreParam>,
    pub should_quit: bool,
}

impl App {
    pub fn new(route: Route, app_url: impl Into<String>, now: Instant) -> Self {
        let mut app = Self {
            screen: Screen::Connect(ConnectScreen { connecting: false }),
            route: Route::Connect,
            app_url: app_url.into(),
            wallet: None,
            notices: VecDeque::new(),
            pending_route: None,
            minting: None,
            should_quit: false,
        };
        app.navigate(route, now);
        app
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn wallet(&self) -> Option<&Connection> {
        self.wallet.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    /// Whether a delayed navigation is waiting to happen.
    pub fn is_transitioning(&self) -> bool {
        self.pending_route.is_some()
    }

    /// Replaces the current screen. The previous screen's state is dropped.
    pub fn navigate(&mut self, route: Route, now: Instant) {
        debug!(from = %self.route, to = %route, "navigate");
        self.pending_route = None;
        self.route = route;
        self.screen = match route {
            Route::Connect => Screen::Connect(ConnectScreen { connecting: false }),
            Route::Quiz => Screen::Quiz(QuizScreen {
                session: QuizSession::new(&QUESTIONS),
                cursor: 0,
            }),
            Route::Results(param) => Screen::Results(ResultsScreen {
                param,
                band: param.band(),
                sending: false,
                celebration: Celebration::start(now),
            }),
        };
    }

    fn schedule(&mut self, route: Route, now: Instant) {
        self.pending_route = Some((now + NAVIGATION_DELAY, route));
    }

    /// Runs any delayed navigation that has come due.
    pub fn tick(&mut self, now: Instant) {
        if let Some((at, route)) = self.pending_route {
            if now >= at {
                self.navigate(route, now);
            }
        }
    }

    pub fn request_connect(&mut self) -> Option<Effect> {
        if self.pending_route.is_some() {
            return None;
        }
        let Screen::Connect(screen) = &mut self.screen else {
            return None;
        };
        if screen.connecting {
            return None;
        }
        screen.connecting = true;
        Some(Effect::Connect)
    }

    pub fn finish_connect(&mut self, result: Result<Connection, WalletError>, now: Instant) {
        let Screen::Connect(screen) = &mut self.screen else {
            return;
        };
        screen.connecting = false;

        match result {
            Ok(connection) => {
                self.wallet = Some(connection);
                self.schedule(Route::Quiz, now);
            }
            Err(WalletError::NoProvider) => {
                self.notices
                    .push_back(Notice::error("Please install MetaMask or another Web3 wallet"));
            }
            Err(e) => {
                warn!(error = %e, "failed to connect wallet");
                self.notices.push_back(Notice::error("Failed to connect wallet"));
            }
        }
    }

    pub fn cursor_down(&mut self) {
        if let Screen::Quiz(quiz) = &mut self.screen {
            let count = quiz.session.current_question().options.len();
            quiz.cursor = (quiz.cursor + 1) % count;
        }
    }

    pub fn cursor_up(&mut self) {
        if let Screen::Quiz(quiz) = &mut self.screen {
            let count = quiz.session.current_question().options.len();
            quiz.cursor = (quiz.cursor + count - 1) % count;
        }
    }

    /// Records the highlighted option as the answer.
    pub fn select_highlighted(&mut self) {
        if let Screen::Quiz(quiz) = &self.screen {
            let cursor = quiz.cursor;
            self.select_option(cursor);
        }
    }

    /// Records the option at `index` as the answer and moves the cursor there.
    pub fn select_option(&mut self, index: usize) {
        let Screen::Quiz(quiz) = &mut self.screen else {
            return;
        };
        let Some(option) = quiz.session.current_question().options.get(index) else {
            return;
        };
        match quiz.session.select_option(option.points) {
            Ok(()) => quiz.cursor = index,
            Err(e) => debug!(error = %e, "selection ignored"),
        }
    }

    pub fn advance(&mut self, now: Instant) {
        let Screen::Quiz(quiz) = &mut self.screen else {
            return;
        };

        match quiz.session.advance() {
            Ok(Step::Next(_)) => quiz.cursor = 0,
            Ok(Step::Complete { total }) => {
                info!(total, "quiz complete");
                self.schedule(Route::results(total), now);
            }
            Err(SessionError::NoSelection) => {}
            Err(e) => debug!(error = %e, "advance ignored"),
        }
    }

    pub fn request_mint(&mut self) -> Option<Effect> {
        let Screen::Results(results) = &mut self.screen else {
            return None;
        };
        if results.sending || self.minting.is_some() {
            return None;
        }
        results.sending = true;
        self.minting = Some(results.param);
        Some(Effect::Mint)
    }

    pub fn finish_mint(&mut self, result: Result<String, WalletError>, clipboard: &dyn Clipboard) {
        let Some(param) = self.minting.take() else {
            return;
        };
        if let Screen::Results(results) = &mut self.screen {
            results.sending = false;
        }

        match result {
            Ok(hash) => {
                let receipt = mint::share(clipboard, hash, param.band(), param.score, &self.app_url);
                self.notices
                    .push_back(Notice::info(format!("Transaction sent! Hash: {}", receipt.tx_hash)));
                if receipt.copied {
                    self.notices
                        .push_back(Notice::info("Share text copied to clipboard!"));
                } else {
                    self.notices.push_back(Notice::error(format!(
                        "Could not copy to clipboard. Share text: {}",
                        receipt.share_text
                    )));
                }
            }
            Err(WalletError::NoProvider | WalletError::NoAccount) => {
                self.notices
                    .push_back(Notice::error("Please connect your wallet first"));
            }
            Err(e) => {
                warn!(error = %e, "mint failed");
                self.notices
                    .push_back(Notice::error("Transaction failed or was cancelled"));
            }
        }
    }

    pub fn take_again(&mut self, now: Instant) {
        if matches!(self.screen, Screen::Results(_)) {
            self.navigate(Route::Connect, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::connect::DEMO_ADDRESS;
    use crate::wallet::ProviderError;

    const URL: &str = "https://q.example";

    fn results(app: &App) -> &ResultsScreen {
        match &app.screen {
            Screen::Results(results) => results,
            _ => panic!("not on the results screen"),
        }
    }

    fn quiz(app: &App) -> &QuizScreen {
        match &app.screen {
            Screen::Quiz(quiz) => quiz,
            _ => panic!("not on the quiz screen"),
        }
    }

    fn demo_connection() -> Connection {
        Connection {
            address: DEMO_ADDRESS.to_string(),
            demo: true,
        }
    }

    #[test]
    fn test_results_without_score_show_lowest_band() {
        let now = Instant::now();
        let app = App::new(Route::parse("/results"), URL, now);

        let screen = results(&app);
        assert_eq!(screen.param.score, 0);
        assert_eq!(screen.band.name, "Shadow Holder");
        assert!(screen.celebration.is_active(now));
    }

    #[test]
    fn test_connect_is_not_duplicated() {
        let now = Instant::now();
        let mut app = App::new(Route::Connect, URL, now);

        assert_eq!(app.request_connect(), Some(Effect::Connect));
        assert_eq!(app.request_connect(), None);

        app.finish_connect(Err(WalletError::UserRejected), now);
        assert_eq!(app.request_connect(), Some(Effect::Connect));
    }

    #[test]
    fn test_successful_connect_moves_to_quiz_after_delay() {
        let now = Instant::now();
        let mut app = App::new(Route::Connect, URL, now);

        app.request_connect();
        app.finish_connect(Ok(demo_connection()), now);
        assert_eq!(app.wallet().map(|w| w.address.as_str()), Some(DEMO_ADDRESS));
        assert!(app.is_transitioning());
        assert_eq!(app.request_connect(), None);

        app.tick(now + Duration::from_millis(100));
        assert_eq!(app.route(), Route::Connect);

        app.tick(now + NAVIGATION_DELAY);
        assert_eq!(app.route(), Route::Quiz);
        assert_eq!(quiz(&app).session.current_index(), 0);
    }

    #[test]
    fn test_connect_failures_raise_notices() {
        let now = Instant::now();
        let mut app = App::new(Route::Connect, URL, now);

        app.request_connect();
        app.finish_connect(Err(WalletError::NoProvider), now);
        assert_eq!(
            app.notice().map(|n| n.message.as_str()),
            Some("Please install MetaMask or another Web3 wallet")
        );
        app.dismiss_notice();

        app.request_connect();
        app.finish_connect(Err(WalletError::Provider(ProviderError::Closed)), now);
        assert_eq!(
            app.notice().map(|n| n.message.as_str()),
            Some("Failed to connect wallet")
        );
        app.dismiss_notice();
        assert!(app.notice().is_none());
        assert_eq!(app.route(), Route::Connect);
    }

    #[test]
    fn test_quiz_through_to_results() {
        let now = Instant::now();
        let mut app = App::new(Route::Quiz, URL, now);

        // Enter without a selection does nothing.
        app.advance(now);
        assert_eq!(quiz(&app).session.current_index(), 0);

        for _ in 0..QUESTIONS.len() {
            // Highest-value option in every question, picked by position.
            let question = quiz(&app).session.current_question();
            let best = question
                .options
                .iter()
                .enumerate()
                .max_by_key(|(_, o)| o.points)
                .map(|(i, _)| i)
                .unwrap();
            app.select_option(best);
            app.advance(now);
        }

        assert!(quiz(&app).session.is_submitting());
        app.tick(now + NAVIGATION_DELAY);

        assert_eq!(app.route(), Route::results(40));
        assert_eq!(results(&app).band.name, "Whale Warrior");
    }

    #[test]
    fn test_cursor_selection() {
        let now = Instant::now();
        let mut app = App::new(Route::Quiz, URL, now);

        app.cursor_up();
        assert_eq!(quiz(&app).cursor, 2);
        app.cursor_down();
        app.cursor_down();
        assert_eq!(quiz(&app).cursor, 1);
        assert_eq!(quiz(&app).session.selected_points(), None);

        app.select_highlighted();
        assert_eq!(quiz(&app).session.selected_points(), Some(3));

        app.select_option(7);
        assert_eq!(quiz(&app).session.selected_points(), Some(3));

        app.advance(now);
        assert_eq!(quiz(&app).cursor, 0);
        assert_eq!(quiz(&app).session.scores(), &[3]);
    }

    #[test]
    fn test_mint_success_notices_and_copies() {
        let now = Instant::now();
        let mut app = App::new(Route::results(33), URL, now);
        let clipboard = MemoryClipboard::default();

        assert_eq!(app.request_mint(), Some(Effect::Mint));
        assert_eq!(app.request_mint(), None);

        app.finish_mint(Ok("0xfeed".to_string()), &clipboard);
        assert!(!results(&app).sending);
        assert_eq!(
            app.notice().map(|n| n.message.as_str()),
            Some("Transaction sent! Hash: 0xfeed")
        );
        app.dismiss_notice();
        assert_eq!(
            app.notice().map(|n| n.message.as_str()),
            Some("Share text copied to clipboard!")
        );
        assert_eq!(
            clipboard.contents().as_deref(),
            Some("I'm a DeFi Dabbler 🏦 on Base! Score: 33/40. Discover your personality: https://q.example")
        );
    }

    #[test]
    fn test_mint_failures() {
        let now = Instant::now();
        let mut app = App::new(Route::results(33), URL, now);
        let clipboard = MemoryClipboard::default();

        app.request_mint();
        app.finish_mint(Err(WalletError::NoAccount), &clipboard);
        assert_eq!(
            app.notice().map(|n| n.message.as_str()),
            Some("Please connect your wallet first")
        );
        app.dismiss_notice();

        app.request_mint();
        app.finish_mint(Err(WalletError::UserRejected), &clipboard);
        let notice = app.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Transaction failed or was cancelled");
        assert!(clipboard.contents().is_none());
    }

    #[test]
    fn test_take_again_returns_to_connect() {
        let now = Instant::now();
        let mut app = App::new(Route::results(12), URL, now);
        app.take_again(now);
        assert_eq!(app.route(), Route::Connect);
        assert!(matches!(app.screen, Screen::Connect(ConnectScreen { connecting: false })));
    }

    #[test]
    fn test_mint_reported_after_leaving_results() {
        let now = Instant::now();
        let mut app = App::new(Route::results(33), URL, now);
        let clipboard = MemoryClipboard::default();

        assert_eq!(app.request_mint(), Some(Effect::Mint));
        app.take_again(now);
        assert_eq!(app.route(), Route::Connect);

        app.finish_mint(Ok("0xfeed".to_string()), &clipboard);
        assert_eq!(
            app.notice().map(|n| n.message.as_str()),
            Some("Transaction sent! Hash: 0xfeed")
        );
        assert_eq!(
            clipboard.contents().as_deref(),
            Some("I'm a DeFi Dabbler 🏦 on Base! Score: 33/40. Discover your personality: https://q.example")
        );
        assert_eq!(app.route(), Route::Connect);
    }
}
