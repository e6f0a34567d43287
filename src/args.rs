//! # args.rs - Command-line argument parsing for ccolor
//!
//! This module handles parsing command-line arguments for the `ccolor` demo
//! binary and provides structured access to the parsed options.

use crate::ColorMode;

/// Parsed command-line arguments for the `ccolor` binary.
///
/// # Fields
///
/// - `color`: Color mode requested by the user (`On`, `Off`).
/// - `style`: Keyword spec applied to the text, e.g. `"bold red"`.
/// - `text`: Words to style, joined with single spaces.
/// - `demo`: Whether to print the showcase instead of styling text.
///
/// # Example
///
/// ```ignore
/// let args = colored_console::args::parse_args()?;
/// println!("Color mode: {:?}", args.color);
/// ```
#[derive(Debug, PartialEq)]
pub struct Args {
    /// Requested color mode (on/off)
    pub color: ColorMode,
    /// Style keywords to apply to the text
    pub style: Option<String>,
    /// Text to style
    pub text: Vec<String>,
    /// Print the showcase
    pub demo: bool,
}

/// Parse command-line arguments and return an `Args` structure.
///
/// This function reads `std::env::args()` (skipping the program name). On
/// invalid usage it returns an `Err(String)` describing the problem.
/// `--help` and `--version` print and exit directly.
pub fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args_impl(args)
}

fn parse_color(value: &str) -> Result<ColorMode, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid color mode: {}", value))
}

/// Internal implementation of argument parsing
///
/// Shared by `parse_args()` (which gets args from the environment) and by
/// tests (which pass args directly).
fn parse_args_impl(args: Vec<String>) -> Result<Args, String> {
    if args.is_empty() {
        print_help();
        std::process::exit(1);
    }

    let mut color = ColorMode::On;
    let mut style = None;
    let mut text = Vec::new();
    let mut demo = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if let Some(value) = arg.strip_prefix("--color=") {
            color = parse_color(value)?;
            i += 1;
        } else if let Some(value) = arg.strip_prefix("--style=") {
            style = Some(value.to_string());
            i += 1;
        } else {
            match arg {
                "--color" => {
                    let Some(value) = args.get(i + 1) else {
                        return Err("Missing value for --color".to_string());
                    };
                    color = parse_color(value)?;
                    i += 2;
                }
                "--style" => {
                    let Some(value) = args.get(i + 1) else {
                        return Err("Missing value for --style".to_string());
                    };
                    style = Some(value.clone());
                    i += 2;
                }
                "--demo" => {
                    demo = true;
                    i += 1;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                "--version" | "-v" => {
                    println!("ccolor {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(0);
                }
                _ => {
                    // Everything else is text
                    text.extend_from_slice(&args[i..]);
                    break;
                }
            }
        }
    }

    if text.is_empty() && !demo {
        return Err("No text specified".to_string());
    }

    Ok(Args {
        color,
        style,
        text,
        demo,
    })
}

/// Print help message to stdout
fn print_help() {
    println!("Colored console styling demo");
    println!();
    println!("Usage: ccolor [OPTIONS] TEXT...");
    println!();
    println!("Options:");
    println!("  --color MODE      Emit escape sequences (on, off)");
    println!("  --style SPEC      Style keywords, e.g. \"bold red on_blue\"");
    println!("  --demo            Print the styling showcase");
    println!("  --version, -v     Show version");
    println!("  --help, -h        Show this help message");
    println!();
    println!("Examples:");
    println!("  ccolor --style \"bold underline cyan\" Hello World");
    println!("  ccolor --color=off --style red plain text");
    println!("  ccolor --demo");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_success() {
        // --color=value format
        let args = parse_args_helper(vec!["--color=off", "hello", "world"]).unwrap();
        assert_eq!(args.color, ColorMode::Off);
        assert_eq!(args.text, vec!["hello", "world"]);
        assert_eq!(args.style, None);
        assert!(!args.demo);

        // --color value and --style value format
        let args = parse_args_helper(vec!["--color", "on", "--style", "bold red", "hi"]).unwrap();
        assert_eq!(args.color, ColorMode::On);
        assert_eq!(args.style.as_deref(), Some("bold red"));
        assert_eq!(args.text, vec!["hi"]);

        // --style=value format
        let args = parse_args_helper(vec!["--style=on_blue", "x"]).unwrap();
        assert_eq!(args.style.as_deref(), Some("on_blue"));

        // --demo alone needs no text
        let args = parse_args_helper(vec!["--demo"]).unwrap();
        assert!(args.demo);
        assert_eq!(args.color, ColorMode::On); // default
        assert!(args.text.is_empty());

        // flags after the first word are text
        let args = parse_args_helper(vec!["a", "--demo"]).unwrap();
        assert_eq!(args.text, vec!["a", "--demo"]);
        assert!(!args.demo);
    }

    #[test]
    fn test_parse_args_errors() {
        let result = parse_args_helper(vec!["--color=auto", "x"]);
        assert!(result.unwrap_err().contains("Invalid color mode"));

        let result = parse_args_helper(vec!["--color"]);
        assert!(result.unwrap_err().contains("Missing value for --color"));

        let result = parse_args_helper(vec!["--style"]);
        assert!(result.unwrap_err().contains("Missing value for --style"));

        let result = parse_args_helper(vec!["--color=on"]);
        assert!(result.unwrap_err().contains("No text specified"));
    }

    // Helper function to test parse_args without std::env::args dependency
    fn parse_args_helper(args: Vec<&str>) -> Result<Args, String> {
        let args: Vec<String> = args.into_iter().map(|s| s.to_string()).collect();
        parse_args_impl(args)
    }
}
