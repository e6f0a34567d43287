//! # codes.rs - SGR parameter table
//!
//! This module holds the numeric SGR (Select Graphic Rendition) parameters used
//! by the renderer, plus the small amount of arithmetic needed to derive
//! background and bright variants from a foreground color.
//!
//! ## Code layout
//!
//! - **Reset**: `0`
//! - **Intensity**: bold `1`, faint `2`
//! - **Decoration**: italic `3`, underline `4`, blink `5`, reverse `7`, hidden `8`, strike `9`
//! - **Foreground colors**: `30..=37`, bright `90..=97`
//! - **Background colors**: foreground + 10, i.e. `40..=47` and `100..=107`

/// A single SGR parameter.
pub type Code = u8;

pub const RESET: Code = 0;

pub const BOLD: Code = 1;
pub const FAINT: Code = 2;

pub const ITALIC: Code = 3;
pub const UNDERLINE: Code = 4;
pub const BLINK: Code = 5;
pub const REVERSE: Code = 7;
pub const HIDDEN: Code = 8;
pub const STRIKE: Code = 9;

pub const BLACK: Code = 30;
pub const RED: Code = 31;
pub const GREEN: Code = 32;
pub const YELLOW: Code = 33;
pub const BLUE: Code = 34;
pub const PURPLE: Code = 35;
pub const CYAN: Code = 36;
pub const WHITE: Code = 37;

/// Offset from a foreground color to the matching background color.
pub const BACKGROUND_SHIFT: Code = 10;
/// Offset from a normal color to the matching bright color.
pub const BRIGHT_SHIFT: Code = 60;

pub const BRIGHT_BLACK: Code = BLACK + BRIGHT_SHIFT;
pub const BRIGHT_RED: Code = RED + BRIGHT_SHIFT;
pub const BRIGHT_GREEN: Code = GREEN + BRIGHT_SHIFT;
pub const BRIGHT_YELLOW: Code = YELLOW + BRIGHT_SHIFT;
pub const BRIGHT_BLUE: Code = BLUE + BRIGHT_SHIFT;
pub const BRIGHT_PURPLE: Code = PURPLE + BRIGHT_SHIFT;
pub const BRIGHT_CYAN: Code = CYAN + BRIGHT_SHIFT;
pub const BRIGHT_WHITE: Code = WHITE + BRIGHT_SHIFT;

/// Color names in code order, starting at `BLACK`.
pub const COLOR_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "purple", "cyan", "white",
];

/// Normal foreground color (`30..=37`).
#[inline]
pub const fn is_normal_color(code: Code) -> bool {
    code >= BLACK && code <= WHITE
}

/// Bright foreground color (`90..=97`).
#[inline]
pub const fn is_bright_color(code: Code) -> bool {
    code >= BRIGHT_BLACK && code <= BRIGHT_WHITE
}

/// Foreground color of either intensity. Only these can move to the background.
#[inline]
pub const fn is_color(code: Code) -> bool {
    is_normal_color(code) || is_bright_color(code)
}

/// Background color of either intensity (`40..=47`, `100..=107`).
#[inline]
pub const fn is_background_color(code: Code) -> bool {
    (code >= BLACK + BACKGROUND_SHIFT && code <= WHITE + BACKGROUND_SHIFT)
        || (code >= BRIGHT_BLACK + BACKGROUND_SHIFT && code <= BRIGHT_WHITE + BACKGROUND_SHIFT)
}

/// Any color code on any layer.
#[inline]
pub const fn is_any_color(code: Code) -> bool {
    is_color(code) || is_background_color(code)
}

/// Background form of a foreground color, `None` for anything else.
#[inline]
pub const fn to_background(code: Code) -> Option<Code> {
    if is_color(code) {
        Some(code + BACKGROUND_SHIFT)
    } else {
        None
    }
}

/// Bright form of a normal foreground color, `None` for anything else.
#[inline]
pub const fn to_bright(code: Code) -> Option<Code> {
    if is_normal_color(code) {
        Some(code + BRIGHT_SHIFT)
    } else {
        None
    }
}

/// Look up a color by name, accepting `magenta` as an alias for `purple`.
pub fn color_from_name(name: &str) -> Option<Code> {
    let name = if name == "magenta" { "purple" } else { name };
    COLOR_NAMES
        .iter()
        .position(|candidate| *candidate == name)
        .map(|index| BLACK + index as Code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_ranges() {
        assert!(is_normal_color(RED));
        assert!(!is_normal_color(BRIGHT_RED));
        assert!(is_bright_color(BRIGHT_WHITE));
        assert!(!is_bright_color(WHITE));
        assert!(is_color(BLACK) && is_color(BRIGHT_BLACK));
        assert!(!is_color(BOLD));
        assert!(!is_color(41));
    }

    #[test]
    fn test_background_ranges() {
        assert!(is_background_color(40));
        assert!(is_background_color(107));
        assert!(!is_background_color(48));
        assert!(!is_background_color(RED));
        assert!(is_any_color(101));
        assert!(!is_any_color(STRIKE));
    }

    #[test]
    fn test_shifts() {
        assert_eq!(to_background(RED), Some(41));
        assert_eq!(to_background(BRIGHT_RED), Some(101));
        assert_eq!(to_background(41), None);
        assert_eq!(to_background(BOLD), None);

        assert_eq!(to_bright(GREEN), Some(92));
        assert_eq!(to_bright(92), None);
        assert_eq!(to_bright(42), None);
        assert_eq!(to_bright(ITALIC), None);
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(color_from_name("black"), Some(BLACK));
        assert_eq!(color_from_name("white"), Some(WHITE));
        assert_eq!(color_from_name("magenta"), Some(PURPLE));
        assert_eq!(color_from_name("purple"), Some(PURPLE));
        assert_eq!(color_from_name("orange"), None);
        assert_eq!(color_from_name(""), None);
    }
}
