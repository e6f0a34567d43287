//! # console.rs - Styling sessions
//!
//! A [`Console`] carries the one piece of configuration the styling layer
//! needs: whether escape sequences are emitted at all. It is decided once,
//! when the session starts, and every style handed out afterwards follows it.
//!
//! - **Enabled**: accessors return real styles.
//! - **Disabled**: accessors return [`Style::Empty`], which absorbs any
//!   further composition, so the same call-site code yields plain text.
//!
//! ## Usage Example
//!
//! ```
//! use colored_console::colored;
//!
//! let line = colored(true, |c| {
//!     let header = c.green() + c.underline() + c.bold();
//!     c.paint("Hello World", &header)
//! });
//! assert_eq!(line, "\x1b[1m\x1b[4m\x1b[32mHello World\x1b[0m");
//!
//! let plain = colored(false, |c| c.paint("Hello World", &c.green().bold()));
//! assert_eq!(plain, "Hello World");
//! ```

use std::fmt::Display;
use std::io::Write;

use crate::ColorMode;
use crate::codes::{self, Code};
use crate::render;
use crate::style::{Style, UnknownStyle};

/// A styling session with a fixed on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Console {
    enabled: bool,
}

macro_rules! attribute_accessors {
    ($($(#[$meta:meta])* $name:ident => $code:path),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(&self) -> Style {
                self.style($code)
            }
        )*
    };
}

impl Console {
    /// Create a session that styles when `enabled` is true.
    pub const fn new(enabled: bool) -> Self {
        Console { enabled }
    }

    /// Session that emits escape sequences.
    pub const fn enabled() -> Self {
        Console::new(true)
    }

    /// Session that renders everything as plain text.
    pub const fn disabled() -> Self {
        Console::new(false)
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A single-code style, or [`Style::Empty`] when disabled.
    pub const fn style(&self, code: Code) -> Style {
        if self.enabled {
            Style::single(code)
        } else {
            Style::Empty
        }
    }

    attribute_accessors! {
        bold => codes::BOLD,
        /// Low intensity.
        faint => codes::FAINT,
        italic => codes::ITALIC,
        underline => codes::UNDERLINE,
        blink => codes::BLINK,
        reverse => codes::REVERSE,
        hidden => codes::HIDDEN,
        strike => codes::STRIKE,
        black => codes::BLACK,
        red => codes::RED,
        green => codes::GREEN,
        yellow => codes::YELLOW,
        blue => codes::BLUE,
        purple => codes::PURPLE,
        cyan => codes::CYAN,
        white => codes::WHITE,
    }

    /// Parse a keyword spec such as `"bold red on_blue"`.
    ///
    /// Unknown keywords are reported even when the session is disabled, so a
    /// typo does not go unnoticed just because colors are off.
    pub fn parse(&self, spec: &str) -> Result<Style, UnknownStyle> {
        let style: Style = spec.parse()?;
        Ok(if self.enabled { style } else { Style::Empty })
    }

    /// Render the string form of `value` with `style`.
    pub fn paint<T: Display + ?Sized>(&self, value: &T, style: &Style) -> String {
        style.render(&value.to_string())
    }

    /// Like [`Console::paint`], but only styles when `predicate` holds.
    ///
    /// ```
    /// use colored_console::Console;
    ///
    /// let c = Console::enabled();
    /// let evens: Vec<String> = (1..=4).map(|n| c.paint_if(&n, &c.cyan(), |n| n % 2 == 0)).collect();
    /// assert_eq!(evens, ["1", "\x1b[36m2\x1b[0m", "3", "\x1b[36m4\x1b[0m"]);
    /// ```
    pub fn paint_if<T, F>(&self, value: &T, style: &Style, predicate: F) -> String
    where
        T: Display + ?Sized,
        F: FnOnce(&T) -> bool,
    {
        if predicate(value) {
            self.paint(value, style)
        } else {
            value.to_string()
        }
    }

    /// Wrap the string form of `value` with several codes at once.
    ///
    /// A disabled session returns the plain string without looking at the
    /// codes.
    pub fn wrap<T: Display + ?Sized>(&self, value: &T, codes: &[Code]) -> String {
        let text = value.to_string();
        if !self.enabled {
            return text;
        }
        render::wrap_codes(&text, codes)
    }

    /// Brighten already rendered text, see [`render::bright_str`].
    pub fn bright_str(&self, text: &str) -> String {
        if self.enabled {
            render::bright_str(text)
        } else {
            text.to_string()
        }
    }

    /// Move already rendered text's color to the background, see
    /// [`render::bg_str`].
    pub fn bg_str(&self, text: &str) -> String {
        if self.enabled {
            render::bg_str(text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::enabled()
    }
}

impl From<ColorMode> for Console {
    fn from(mode: ColorMode) -> Self {
        Console::new(mode.is_enabled())
    }
}

/// Styling for anything with a string form.
///
/// These methods ignore any session; whether output is styled is decided by
/// the style itself, and a disabled session only ever hands out
/// [`Style::Empty`].
pub trait Paint: Display {
    /// Render `self` with `style`.
    fn paint(&self, style: &Style) -> String {
        style.render(&self.to_string())
    }

    /// Render `self` with `style` when `predicate` holds, plain otherwise.
    fn paint_if<F>(&self, style: &Style, predicate: F) -> String
    where
        F: FnOnce(&Self) -> bool,
    {
        if predicate(self) {
            self.paint(style)
        } else {
            self.to_string()
        }
    }
}

impl<T: Display + ?Sized> Paint for T {}

/// Run `block` in a session that styles when `enabled` is true.
pub fn colored<R, F>(enabled: bool, block: F) -> R
where
    F: FnOnce(&Console) -> R,
{
    block(&Console::new(enabled))
}

/// Run `block` in an enabled session, typically to build a reusable style.
///
/// ```
/// use colored_console::{Style, styled};
///
/// let chapter = styled(|c| c.cyan() + c.underline() + c.bold());
/// assert_eq!(chapter, Style::CYAN + Style::UNDERLINE + Style::BOLD);
/// ```
pub fn styled<R, F>(block: F) -> R
where
    F: FnOnce(&Console) -> R,
{
    colored(true, block)
}

/// Write the string built by `block` to `out`.
pub fn write_to<W, F>(out: &mut W, enabled: bool, block: F) -> std::io::Result<()>
where
    W: Write + ?Sized,
    F: FnOnce(&Console) -> String,
{
    out.write_all(colored(enabled, block).as_bytes())
}

/// Print the string built by `block` to stdout, without a trailing newline.
pub fn print<F>(enabled: bool, block: F) -> std::io::Result<()>
where
    F: FnOnce(&Console) -> String,
{
    let mut stdout = std::io::stdout().lock();
    write_to(&mut stdout, enabled, block)?;
    stdout.flush()
}

/// Print the string built by `block` to stdout, followed by a newline.
pub fn println<F>(enabled: bool, block: F) -> std::io::Result<()>
where
    F: FnOnce(&Console) -> String,
{
    let mut stdout = std::io::stdout().lock();
    write_to(&mut stdout, enabled, block)?;
    stdout.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_accessors() {
        let c = Console::enabled();
        assert_eq!(c.bold(), Style::BOLD);
        assert_eq!(c.strike(), Style::STRIKE);
        assert_eq!(c.faint(), Style::FAINT);
        assert_eq!(c.white(), Style::WHITE);
        assert_eq!(c.style(97), Style::BRIGHT_WHITE);
    }

    #[test]
    fn test_disabled_accessors_are_empty() {
        let c = Console::disabled();
        for style in [c.bold(), c.faint(), c.strike(), c.hidden(), c.red(), c.style(42)] {
            assert!(style.is_empty());
        }
        assert!((c.red() + c.bold()).bg().bright().is_empty());
    }

    #[test]
    fn test_paint_and_paint_if() {
        let c = Console::enabled();
        assert_eq!(c.paint("x", &c.red()), "\x1b[31mx\x1b[0m");
        assert_eq!(c.paint(&3.5, &c.blue()), "\x1b[34m3.5\x1b[0m");
        assert_eq!(c.paint_if(&12, &c.cyan(), |n| *n >= 10), "\x1b[36m12\x1b[0m");
        assert_eq!(c.paint_if(&9, &c.cyan(), |n| *n >= 10), "9");
    }

    #[test]
    fn test_wrap() {
        let c = Console::enabled();
        assert_eq!(c.wrap("x", &[1, 3]), "\x1b[1m\x1b[3mx\x1b[0m");
        assert_eq!(c.wrap("x", &[codes::RESET, 4]), "\x1b[4mx\x1b[0m");
        assert_eq!(Console::disabled().wrap("x", &[1, 3]), "x");
        assert_eq!(Console::disabled().wrap(&7, &[0]), "7");
    }

    #[test]
    fn test_parse() {
        let c = Console::enabled();
        assert_eq!(c.parse("bold red"), Ok(Style::BOLD + Style::RED));
        assert_eq!(Console::disabled().parse("bold red"), Ok(Style::Empty));
        assert!(Console::disabled().parse("bold sparkly").is_err());
    }

    #[test]
    fn test_string_transforms() {
        let c = Console::enabled();
        let red = c.paint("x", &c.red());
        assert_eq!(c.bright_str(&red), "\x1b[91mx\x1b[0m");
        assert_eq!(c.bg_str(&red), "\x1b[41mx\x1b[0m");
        assert_eq!(Console::disabled().bg_str(&red), red);
    }

    #[test]
    fn test_paint_trait() {
        assert_eq!("hi".paint(&Style::GREEN), "\x1b[32mhi\x1b[0m");
        assert_eq!(5.paint_if(&Style::GREEN, |n| *n > 10), "5");
        assert_eq!("hi".paint(&Style::Empty), "hi");
    }

    #[test]
    fn test_console_from_color_mode() {
        assert!(Console::from(ColorMode::On).is_enabled());
        assert!(!Console::from(ColorMode::Off).is_enabled());
        assert_eq!(Console::default(), Console::enabled());
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        write_to(&mut out, true, |c| c.paint("ok", &c.green())).unwrap();
        write_to(&mut out, false, |c| c.paint(" ok", &c.green())).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[32mok\x1b[0m ok");
    }
}
