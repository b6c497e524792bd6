//! Runtime settings assembled from the command line.

use crate::connect::Environment;
use crate::route::Route;

/// Origin used in share text when none is configured.
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// WebSocket URL of the wallet bridge. `None` means no wallet is
    /// available.
    pub wallet_url: Option<String>,
    /// Public address of the app, shared alongside the result.
    pub app_url: String,
    /// Skip the wallet and run with a placeholder account.
    pub demo: bool,
    /// Screen to open first.
    pub route: Route,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet_url: None,
            app_url: DEFAULT_APP_URL.to_string(),
            demo: false,
            route: Route::Connect,
        }
    }
}

impl Config {
    pub fn environment(&self) -> Environment {
        Environment::detect(&self.app_url, self.demo)
    }
}
