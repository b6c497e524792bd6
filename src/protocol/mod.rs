//! Wallet bridge wire format.

mod messages;

pub use messages::*;
