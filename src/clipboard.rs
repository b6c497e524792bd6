//! Outbound clipboard writes.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> io::Result<()>;
}

/// Sets the system clipboard through the terminal with an OSC 52 escape.
///
/// Works over SSH and inside tmux (with `set-clipboard on`); terminals that
/// ignore OSC 52 drop the sequence silently.
#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    pub fn sequence(text: &str) -> String {
        format!("\u{1b}]52;c;{}\u{7}", STANDARD.encode(text.as_bytes()))
    }
}

impl Clipboard for Osc52Clipboard {
    fn copy(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(Self::sequence(text).as_bytes())?;
        stdout.flush()
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryClipboard;
