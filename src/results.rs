//! Score resolution and the results screen's pure helpers.

use std::time::{Duration, Instant};

use crate::data::{MAX_SCORE, PERSONALITIES};
use crate::models::PersonalityBand;

/// How long the celebration plays after the results screen opens.
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(5);

/// Returns the first band whose range contains `score`, or the lowest band
/// when none does.
pub fn resolve(score: u32) -> &'static PersonalityBand {
    PERSONALITIES
        .iter()
        .find(|band| band.contains(score))
        .unwrap_or(&PERSONALITIES[0])
}

/// Score carried from the quiz to the results screen.
///
/// Built from untrusted navigation input, so parsing never fails: anything
/// that does not start with digits is read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreParam {
    pub score: u32,
}

impl ScoreParam {
    pub fn new(score: u32) -> Self {
        Self { score }
    }

    /// Parses the raw `score` query value.
    ///
    /// Leading whitespace and a sign are accepted and parsing stops at the
    /// first non-digit, so `"12abc"` reads as 12. Negative values clamp to
    /// zero and values beyond `u32` saturate.
    pub fn from_query(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let trimmed = raw.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let mut value: u32 = 0;
        for ch in digits.chars() {
            let Some(digit) = ch.to_digit(10) else {
                break;
            };
            value = value.saturating_mul(10).saturating_add(digit);
        }

        if negative {
            value = 0;
        }
        Self { score: value }
    }

    pub fn band(&self) -> &'static PersonalityBand {
        resolve(self.score)
    }
}

/// Text placed on the clipboard after a successful mint.
pub fn share_text(band: &PersonalityBand, score: u32, app_url: &str) -> String {
    format!(
        "I'm a {} {} on Base! Score: {}/{}. Discover your personality: {}",
        band.name, band.emoji, score, MAX_SCORE, app_url
    )
}

/// Self-expiring confetti timer.
#[derive(Debug, Clone, Copy)]
pub struct Celebration {
    started: Instant,
    duration: Duration,
}

impl Celebration {
    pub fn start(now: Instant) -> Self {
        Self {
            started: now,
            duration: CELEBRATION_DURATION,
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
    }

    /// Frames elapsed at roughly 20 fps; drives the animation.
    pub fn frame(&self, now: Instant) -> u64 {
        (now.saturating_duration_since(self.started).as_millis() / 50) as u64
    }
}
