//! # lib.rs - Core Library for colored-console
//!
//! This crate turns text plus a set of visual attributes into ANSI-styled
//! strings, and can switch all styling off without changing call-site code.
//!
//! ## Architecture
//!
//! The library is organized into the following components:
//!
//! - **codes**: SGR parameter table and background/bright arithmetic
//! - **render**: Reset-aware escape sequence rendering and prefix inspection
//! - **style**: The immutable, composable [`Style`] value
//! - **console**: Styling sessions carrying the on/off switch
//! - **ColorMode**: Controls whether color output is enabled (On/Off)
//!
//! ## Usage Example
//!
//! ```
//! use colored_console::{Style, colored};
//!
//! let out = colored(true, |c| {
//!     format!("{} Is the New {}", c.paint("Orange", &c.yellow().bold()), c.paint("Black", &c.bold().reverse()))
//! });
//! assert!(out.starts_with("\x1b[1m\x1b[33mOrange\x1b[0m"));
//!
//! // Nested styling keeps the outer attribute alive across inner resets.
//! let inner = Style::RED.render("x");
//! let outer = Style::BOLD.render(&format!("a{}b", inner));
//! assert_eq!(outer, "\x1b[1ma\x1b[31mx\x1b[0m\x1b[1mb\x1b[0m");
//! ```

// Diagnostics for no-op transforms and unknown keywords, only with the
// `debug` feature.
#[cfg(feature = "debug")]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

#[cfg(not(feature = "debug"))]
macro_rules! debug_println {
    ($($arg:tt)*) => {};
}

pub mod args;
pub mod codes;
pub mod console;
pub mod render;
pub mod style;

use std::str::FromStr;

pub use codes::Code;
pub use console::{Console, Paint, colored, print, println, styled};
pub use style::{Style, Styled, UnknownStyle};

/// Control whether colored output should be enabled for a session.
///
/// - **On**: Emit escape sequences
/// - **Off**: Output plain text
///
/// Detecting whether stdout is a terminal is left to the caller.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use colored_console::ColorMode;
///
/// assert_eq!(ColorMode::from_str("on"), Ok(ColorMode::On));
/// assert_eq!(ColorMode::from_str("off"), Ok(ColorMode::Off));
/// assert!(ColorMode::from_str("auto").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorMode {
    /// Always enable colored output
    #[default]
    On,
    /// Always disable colored output
    Off,
}

impl ColorMode {
    /// Whether this mode emits escape sequences.
    pub const fn is_enabled(self) -> bool {
        matches!(self, ColorMode::On)
    }
}

impl From<bool> for ColorMode {
    fn from(enabled: bool) -> Self {
        if enabled { ColorMode::On } else { ColorMode::Off }
    }
}

impl FromStr for ColorMode {
    type Err = ();

    /// Parse a string into a ColorMode variant.
    ///
    /// Accepts "on" or "off" (case-sensitive). Anything else is `Err(())`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(ColorMode::On),
            "off" => Ok(ColorMode::Off),
            _ => Err(()),
        }
    }
}
