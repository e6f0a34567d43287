//! # render.rs - Escape sequence rendering
//!
//! Turns attribute codes plus raw text into ANSI-coded strings.
//!
//! ## Reset-aware wrapping
//!
//! Text handed to the renderer may already carry styling from an inner style,
//! closed by `ESC[0m` somewhere in the middle. A single outer prefix/suffix
//! pair would leave everything after that inner reset without the outer
//! attribute. The renderer therefore splits the text on the reset sequence
//! and wraps every non-empty segment on its own:
//!
//! ```text
//! wrap_single(1, "a\x1b[31mx\x1b[0mb")
//!   == "\x1b[1ma\x1b[31mx\x1b[0m" + "\x1b[1mb\x1b[0m"
//! ```
//!
//! ## Prefix inspection
//!
//! [`first_code`] reads the code of an escape sequence sitting at byte 0.
//! [`bright_str`] and [`bg_str`] use it to rewrite that leading code in place
//! on text that has already been rendered.

use crate::codes::{self, Code};

/// The reset sequence closing every styled segment.
pub const RESET_SEQUENCE: &str = "\x1b[0m";

lazy_static::lazy_static! {
    // Leading `ESC[<1-2 digits>m`. Anchored: only a sequence at byte 0 counts.
    static ref LEADING_CODE: regex::Regex =
        regex::Regex::new(r"^\x1b\[([0-9]{1,2})m").expect("leading code pattern is valid");
}

/// Escape sequence that applies `code`.
#[inline]
pub fn escape(code: Code) -> String {
    format!("\x1b[{}m", code)
}

/// Wrap `text` with a single code.
///
/// # Examples
///
/// ```
/// use colored_console::render::wrap_single;
///
/// assert_eq!(wrap_single(31, "hi"), "\x1b[31mhi\x1b[0m");
/// ```
pub fn wrap_single(code: Code, text: &str) -> String {
    wrap_codes(text, &[code])
}

/// Wrap every reset-delimited segment of `text` with all of `codes`.
///
/// An explicit reset in `codes` is dropped since one is appended after each
/// segment anyway. When nothing is left to apply the text comes back
/// unchanged. Empty segments (leading, trailing or doubled resets) are
/// discarded.
pub fn wrap_codes(text: &str, codes: &[Code]) -> String {
    let prefix: String = codes
        .iter()
        .filter(|code| **code != codes::RESET)
        .map(|code| escape(*code))
        .collect();

    if prefix.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 2 * (prefix.len() + RESET_SEQUENCE.len()));
    for segment in text.split(RESET_SEQUENCE).filter(|s| !s.is_empty()) {
        out.push_str(&prefix);
        out.push_str(segment);
        out.push_str(RESET_SEQUENCE);
    }
    out
}

/// Code of the escape sequence at the very start of `text`, if any.
///
/// Only sequences of the form `ESC[<1-2 digits>m` are recognised; anything
/// else, including a sequence further into the string, yields `None`.
pub fn first_code(text: &str) -> Option<Code> {
    LEADING_CODE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Replace the leading code with `transform(code)` when it returns `Some`.
fn rewrite_first_code(text: &str, transform: fn(Code) -> Option<Code>) -> String {
    let Some(digits) = LEADING_CODE.captures(text).and_then(|caps| caps.get(1)) else {
        return text.to_string();
    };
    let shifted = digits
        .as_str()
        .parse::<Code>()
        .ok()
        .and_then(transform);

    match shifted {
        Some(code) => format!("{}{}{}", &text[..digits.start()], code, &text[digits.end()..]),
        None => {
            debug_println!("leading code {:?} left unchanged", digits.as_str());
            text.to_string()
        }
    }
}

/// Brighten rendered text whose leading code is a normal foreground color.
///
/// ```
/// use colored_console::render::bright_str;
///
/// assert_eq!(bright_str("\x1b[32mok\x1b[0m"), "\x1b[92mok\x1b[0m");
/// assert_eq!(bright_str("\x1b[1mok\x1b[0m"), "\x1b[1mok\x1b[0m");
/// ```
pub fn bright_str(text: &str) -> String {
    rewrite_first_code(text, codes::to_bright)
}

/// Move rendered text's leading foreground color to the background.
pub fn bg_str(text: &str) -> String {
    rewrite_first_code(text, codes::to_background)
}
