//! Composable ANSI styles
//!
//! A [`Style`] is an immutable description of zero or more SGR attributes.
//! Styles are built from single attributes and combined with `+` or
//! [`Style::compose`]; every operation returns a new value and shares the
//! untouched parts of the old one.
//!
//! ## Usage
//!
//! ```
//! use colored_console::Style;
//!
//! let header = Style::GREEN + Style::UNDERLINE + Style::BOLD;
//! println!("{}", header.apply_to("Hello World"));
//!
//! let warning = Style::YELLOW.bold();
//! assert_eq!(warning.render("!"), "\x1b[1m\x1b[33m!\x1b[0m");
//! ```
//!
//! ## Nesting order
//!
//! `a + b` adds `b` as the most recent attribute, and the most recent
//! attribute is the outermost wrap: `(a + b).render(t) == b.render(&a.render(t))`.
//!
//! ## The empty style
//!
//! [`Style::Empty`] renders text unchanged and absorbs every composition it
//! takes part in. A disabled [`Console`](crate::Console) hands it out for every
//! attribute, which turns a whole chain of styling calls into plain text.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use std::sync::Arc;

use crate::codes::{self, Code};
use crate::render;

/// An immutable, shareable terminal style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// No styling. Renders text unchanged and absorbs composition.
    #[default]
    Empty,
    /// A single SGR attribute.
    Simple(Code),
    /// `outer` applied around the rendering of `inner`.
    Composite { outer: Arc<Style>, inner: Arc<Style> },
}

/// Outcome of looking for the nearest color-bearing attribute.
enum ColorSearch {
    /// No color anywhere in the style.
    Missing,
    /// The nearest color exists but the transform does not apply to it.
    Blocked,
    Replaced(Style),
}

macro_rules! chaining_accessors {
    ($($(#[$meta:meta])* $name:ident => $constant:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            #[must_use]
            pub fn $name(&self) -> Style {
                self.then(Style::$constant)
            }
        )*
    };
}

impl Style {
    pub const BOLD: Style = Style::Simple(codes::BOLD);
    pub const FAINT: Style = Style::Simple(codes::FAINT);
    pub const ITALIC: Style = Style::Simple(codes::ITALIC);
    pub const UNDERLINE: Style = Style::Simple(codes::UNDERLINE);
    pub const BLINK: Style = Style::Simple(codes::BLINK);
    pub const REVERSE: Style = Style::Simple(codes::REVERSE);
    pub const HIDDEN: Style = Style::Simple(codes::HIDDEN);
    pub const STRIKE: Style = Style::Simple(codes::STRIKE);

    pub const BLACK: Style = Style::Simple(codes::BLACK);
    pub const RED: Style = Style::Simple(codes::RED);
    pub const GREEN: Style = Style::Simple(codes::GREEN);
    pub const YELLOW: Style = Style::Simple(codes::YELLOW);
    pub const BLUE: Style = Style::Simple(codes::BLUE);
    pub const PURPLE: Style = Style::Simple(codes::PURPLE);
    pub const CYAN: Style = Style::Simple(codes::CYAN);
    pub const WHITE: Style = Style::Simple(codes::WHITE);

    pub const BRIGHT_BLACK: Style = Style::Simple(codes::BRIGHT_BLACK);
    pub const BRIGHT_RED: Style = Style::Simple(codes::BRIGHT_RED);
    pub const BRIGHT_GREEN: Style = Style::Simple(codes::BRIGHT_GREEN);
    pub const BRIGHT_YELLOW: Style = Style::Simple(codes::BRIGHT_YELLOW);
    pub const BRIGHT_BLUE: Style = Style::Simple(codes::BRIGHT_BLUE);
    pub const BRIGHT_PURPLE: Style = Style::Simple(codes::BRIGHT_PURPLE);
    pub const BRIGHT_CYAN: Style = Style::Simple(codes::BRIGHT_CYAN);
    pub const BRIGHT_WHITE: Style = Style::Simple(codes::BRIGHT_WHITE);

    /// Style wrapping exactly one code. Any code is accepted.
    #[inline]
    pub const fn single(code: Code) -> Self {
        Style::Simple(code)
    }

    /// Apply `outer` around the rendering of `inner`.
    ///
    /// If either side is [`Style::Empty`] the result is `Empty`.
    pub fn compose(outer: Style, inner: Style) -> Self {
        if outer.is_empty() || inner.is_empty() {
            return Style::Empty;
        }
        Style::Composite {
            outer: Arc::new(outer),
            inner: Arc::new(inner),
        }
    }

    /// Add `next` as the most recent (outermost) attribute.
    #[must_use]
    pub fn then(&self, next: Style) -> Style {
        Style::compose(next, self.clone())
    }

    chaining_accessors! {
        bold => BOLD,
        /// Low intensity.
        faint => FAINT,
        italic => ITALIC,
        underline => UNDERLINE,
        blink => BLINK,
        reverse => REVERSE,
        hidden => HIDDEN,
        strike => STRIKE,
        black => BLACK,
        red => RED,
        green => GREEN,
        yellow => YELLOW,
        blue => BLUE,
        purple => PURPLE,
        cyan => CYAN,
        white => WHITE,
    }

    /// Whether this is the absorbing empty style.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Style::Empty)
    }

    /// Codes in the order their escape sequences open in rendered output,
    /// outermost first.
    pub fn codes(&self) -> Vec<Code> {
        let mut out = Vec::new();
        self.collect_codes(&mut out);
        out
    }

    fn collect_codes(&self, out: &mut Vec<Code>) {
        match self {
            Style::Empty => {}
            Style::Simple(code) => out.push(*code),
            Style::Composite { outer, inner } => {
                outer.collect_codes(out);
                inner.collect_codes(out);
            }
        }
    }

    /// Move the nearest foreground color to the background.
    ///
    /// The nearest color is the most recently added color attribute. When it
    /// is already a background color, or the style holds no color at all,
    /// the style is returned unchanged.
    ///
    /// ```
    /// use colored_console::Style;
    ///
    /// assert_eq!(Style::RED.bg(), Style::single(41));
    /// assert_eq!(Style::BOLD.bg(), Style::BOLD);
    /// ```
    #[must_use]
    pub fn bg(&self) -> Style {
        self.shift_nearest_color(codes::to_background)
    }

    /// Brighten the nearest color when it is a normal foreground color.
    ///
    /// Bright and background colors are left alone, so applying this twice
    /// is the same as applying it once.
    #[must_use]
    pub fn bright(&self) -> Style {
        self.shift_nearest_color(codes::to_bright)
    }

    fn shift_nearest_color(&self, shift: fn(Code) -> Option<Code>) -> Style {
        match self.search_color(shift) {
            ColorSearch::Replaced(style) => style,
            ColorSearch::Missing | ColorSearch::Blocked => {
                debug_println!("color transform is a no-op for {:?}", self.codes());
                self.clone()
            }
        }
    }

    // Visits leaves most recent first: outer before inner at every composite.
    fn search_color(&self, shift: fn(Code) -> Option<Code>) -> ColorSearch {
        match self {
            Style::Empty => ColorSearch::Missing,
            Style::Simple(code) if codes::is_any_color(*code) => match shift(*code) {
                Some(shifted) => ColorSearch::Replaced(Style::Simple(shifted)),
                None => ColorSearch::Blocked,
            },
            Style::Simple(_) => ColorSearch::Missing,
            Style::Composite { outer, inner } => match outer.search_color(shift) {
                ColorSearch::Replaced(style) => ColorSearch::Replaced(Style::Composite {
                    outer: Arc::new(style),
                    inner: Arc::clone(inner),
                }),
                ColorSearch::Blocked => ColorSearch::Blocked,
                ColorSearch::Missing => match inner.search_color(shift) {
                    ColorSearch::Replaced(style) => ColorSearch::Replaced(Style::Composite {
                        outer: Arc::clone(outer),
                        inner: Arc::new(style),
                    }),
                    other => other,
                },
            },
        }
    }

    /// Render `text` with this style.
    pub fn render(&self, text: &str) -> String {
        match self {
            Style::Empty => text.to_string(),
            Style::Simple(code) => render::wrap_single(*code, text),
            Style::Composite { outer, inner } => outer.render(&inner.render(text)),
        }
    }

    /// Wrap a value for styled `Display` output.
    pub fn apply_to<'a, T: fmt::Display + ?Sized>(&'a self, value: &'a T) -> Styled<'a, T> {
        Styled { value, style: self }
    }

    /// Look up a single keyword such as `bold`, `red`, `on_blue` or
    /// `bright_cyan`.
    ///
    /// No-op keywords (`unchanged`, `default`, `none` and the empty word)
    /// map to [`Style::Empty`].
    pub fn from_name(word: &str) -> Result<Style, UnknownStyle> {
        Ok(keyword(word)?.unwrap_or_default())
    }
}

/// Map one keyword to a style, `None` for no-op keywords.
fn keyword(word: &str) -> Result<Option<Style>, UnknownStyle> {
    let code = match word {
        "" | "unchanged" | "default" | "none" => return Ok(None),
        "bold" => codes::BOLD,
        "faint" | "dim" => codes::FAINT,
        "italic" => codes::ITALIC,
        "underline" => codes::UNDERLINE,
        "blink" => codes::BLINK,
        "reverse" => codes::REVERSE,
        "hidden" => codes::HIDDEN,
        "strike" => codes::STRIKE,
        _ => {
            let color = match word.strip_prefix("on_") {
                Some(color) => color_keyword(color).and_then(codes::to_background),
                None => color_keyword(word),
            };
            color.ok_or_else(|| {
                debug_println!("unhandled style: {}", word);
                UnknownStyle(word.to_string())
            })?
        }
    };
    Ok(Some(Style::Simple(code)))
}

fn color_keyword(word: &str) -> Option<Code> {
    match word.strip_prefix("bright_") {
        Some(color) => codes::color_from_name(color).and_then(codes::to_bright),
        None => codes::color_from_name(word),
    }
}

/// Parse space separated keywords, composing them left to right.
///
/// `"bold red"` is `Style::BOLD + Style::RED`. A spec made only of no-op
/// keywords parses to [`Style::Empty`].
///
/// ```
/// use colored_console::Style;
///
/// let style: Style = "bold red on_blue".parse().unwrap();
/// assert_eq!(style, Style::BOLD + Style::RED + Style::BLUE.bg());
/// assert!("bold orange".parse::<Style>().is_err());
/// ```
impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style: Option<Style> = None;
        for word in s.split_whitespace() {
            if let Some(next) = keyword(word)? {
                style = Some(match style {
                    Some(current) => current + next,
                    None => next,
                });
            }
        }
        Ok(style.unwrap_or_default())
    }
}

impl From<Code> for Style {
    fn from(code: Code) -> Self {
        Style::single(code)
    }
}

impl Add for Style {
    type Output = Style;

    fn add(self, rhs: Style) -> Style {
        Style::compose(rhs, self)
    }
}

impl Add<&Style> for &Style {
    type Output = Style;

    fn add(self, rhs: &Style) -> Style {
        Style::compose(rhs.clone(), self.clone())
    }
}

/// A style keyword that is not in the name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unhandled style: {}", self.0)
    }
}

impl std::error::Error for UnknownStyle {}

/// Wrapper for styled output that implements Display
pub struct Styled<'a, T: ?Sized> {
    value: &'a T,
    style: &'a Style,
}

impl<T: fmt::Display + ?Sized> fmt::Display for Styled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.is_empty() {
            write!(f, "{}", self.value)
        } else {
            f.write_str(&self.style.render(&self.value.to_string()))
        }
    }
}
