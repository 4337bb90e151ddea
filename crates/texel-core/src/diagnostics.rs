/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Diagnostics sink
//!
//! Messages are always forwarded to the [`log`] facade, which acts as the default
//! console stream. An additional [`Console`] can be attached to mirror the
//! messages somewhere else, e.g an in-app terminal.
//!
//! A single [`Diagnostics`] is created at start up and handed to whoever needs it,
//! there is no global state.
use std::fmt;

use log::Level;

/// Something that can receive formatted text
pub trait Console {
    /// Write already formatted text.
    fn write(&self, text: &str);
}

/// Foreground colors understood by ANSI terminals
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AnsiColor {
    Black = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White
}

/// The diagnostics sink
#[derive(Default)]
pub struct Diagnostics {
    console: Option<Box<dyn Console + Send + Sync>>
}

impl Diagnostics {
    /// Create a sink that only writes to the log facade
    pub fn new() -> Diagnostics {
        Diagnostics::default()
    }

    /// Create a sink that mirrors every message to `console`
    pub fn with_console<C: Console + Send + Sync + 'static>(console: C) -> Diagnostics {
        Diagnostics {
            console: Some(Box::new(console))
        }
    }

    /// Attach a console, replacing any previous one
    pub fn set_console<C: Console + Send + Sync + 'static>(&mut self, console: C) {
        self.console = Some(Box::new(console));
    }

    /// Return true if a console is attached
    pub fn has_console(&self) -> bool {
        self.console.is_some()
    }

    /// Format and emit a message
    ///
    /// # Returns
    /// The length of the formatted message in bytes
    pub fn printf(&self, level: Level, args: fmt::Arguments) -> usize {
        let text = fmt::format(args);

        if let Some(console) = &self.console {
            console.write(&to_crlf(&text));
        }
        forward_to_log(level, &text);

        text.len()
    }

    /// Format and emit a message, coloring it on the attached console
    ///
    /// The log facade receives the plain text.
    pub fn printf_ansi(&self, color: AnsiColor, level: Level, args: fmt::Arguments) -> usize {
        let text = fmt::format(args);

        if let Some(console) = &self.console {
            console.write(&format!("\u{1b}[3{}m", color as u8));
            console.write(&to_crlf(&text));
            console.write("\u{1b}[0m");
        }
        forward_to_log(level, &text);

        text.len()
    }
}

fn forward_to_log(level: Level, text: &str) {
    // log records are line based, the trailing newline is implied
    log::log!(level, "{}", text.trim_end_matches('\n'));
}

/// Terminal consoles expect `\r\n` line endings
fn to_crlf(text: &str) -> String {
    text.replace('\n', "\r\n")
}
