//! Question and personality tables compiled into the binary.

mod personalities;
mod questions;

pub use personalities::PERSONALITIES;
pub use questions::QUESTIONS;

/// Highest total a full run can reach.
pub const MAX_SCORE: u32 = 40;
