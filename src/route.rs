//! Screen addresses.
//!
//! Screens hand data to each other only through the route, the same way the
//! browser version passes the score in the results URL.

use std::fmt;

use url::Url;

use crate::results::ScoreParam;

/// Routes are resolved against this origin, like paths in a browser tab.
const ROUTE_BASE: &str = "http://localhost/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Connect,
    Quiz,
    Results(ScoreParam),
}

impl Route {
    pub fn results(score: u32) -> Self {
        Self::Results(ScoreParam::new(score))
    }

    /// Parses a path such as `/results?score=12`. Unknown paths land on the
    /// connect screen.
    pub fn parse(path: &str) -> Self {
        let Ok(url) = Url::parse(ROUTE_BASE).and_then(|base| base.join(path)) else {
            return Self::Connect;
        };

        match url.path().trim_end_matches('/') {
            "/quiz" => Self::Quiz,
            "/results" => {
                let score = url
                    .query_pairs()
                    .find(|(key, _)| key == "score")
                    .map(|(_, value)| value);
                Self::Results(ScoreParam::from_query(score.as_deref()))
            }
            _ => Self::Connect,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Connect => write!(f, "/"),
            Route::Quiz => write!(f, "/quiz"),
            Route::Results(param) => write!(f, "/results?score={}", param.score),
        }
    }
}
