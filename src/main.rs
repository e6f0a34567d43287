use std::io::Write;

use colored_console::{Console, Style, args::parse_args};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Main entry point for the ccolor demo program.
///
/// - `ccolor --style SPEC TEXT...` prints TEXT styled with the keyword SPEC.
/// - `ccolor --demo` prints a showcase of composition, background and bright
///   transforms, predicates and nested styling.
/// - `--color off` turns every style into plain text.
fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let console = Console::from(args.color);
    let mut stdout = std::io::stdout().lock();

    let result = if args.demo {
        showcase(&console)
            .iter()
            .try_for_each(|line| writeln!(stdout, "{}", line))
    } else {
        let style = match args.style.as_deref().map(|spec| console.parse(spec)) {
            Some(Ok(style)) => style,
            Some(Err(e)) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
            None => Style::Empty,
        };
        writeln!(stdout, "{}", console.paint(&args.text.join(" "), &style))
    };

    // Broken pipes are not worth reporting
    if let Err(e) = result
        && e.kind() != std::io::ErrorKind::BrokenPipe
    {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Lines printed by `--demo`.
fn showcase(c: &Console) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(c.paint("Hello World", &c.cyan().bold()));
    // cyan as background color
    lines.push(c.paint("Hello World", &c.cyan().bg()));

    // any Display value can be styled, not just strings
    let pi = 22f32 / 7.0;
    lines.push(c.paint(&pi, &c.blue().italic().underline()));

    let header = c.green() + c.underline() + c.bold();
    lines.push(c.paint("Hello World", &header));

    // only even numbers in cyan
    let numbers: Vec<String> = (1..=5)
        .map(|n| c.paint_if(&n, &c.cyan(), |n| n % 2 == 0))
        .collect();
    lines.push(numbers.join(", "));

    let chapter = c.cyan() + c.underline() + c.bold();
    let chapter_number = 12;
    lines.push(c.paint_if(
        &format!("{}. Goodbye World", chapter_number),
        &chapter,
        |_| chapter_number >= 10,
    ));

    lines.push(format!(
        "{} Is the New {}",
        c.paint("Orange", &c.yellow().bold()),
        c.paint("Black", &c.bold().reverse())
    ));

    lines.push(format!(
        "{}{}",
        c.paint("Degrees:", &c.blue().bold()),
        c.paint(" 22", &c.italic().bold())
    ));

    lines.push(c.paint("bright on background", &c.red().bright().bg()));

    // inner resets do not end outer styles
    let color = format!("color {} normal", c.paint("Yellow", &c.yellow().bold()));
    let italic = format!("italic {} italic", c.paint(&color, &c.faint()));
    lines.push(c.paint(&format!("bold {} bold", c.paint(&italic, &c.italic())), &c.bold()));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_disabled_is_plain() {
        let lines = showcase(&Console::disabled());
        assert!(lines.iter().all(|line| !line.contains('\x1b')));
        assert_eq!(lines[0], "Hello World");
        assert_eq!(lines[4], "1, 2, 3, 4, 5");
        assert_eq!(lines[6], "Orange Is the New Black");
        assert_eq!(
            lines[9],
            "bold italic color Yellow normal italic bold"
        );
    }

    #[test]
    fn test_showcase_enabled() {
        let lines = showcase(&Console::enabled());
        assert_eq!(lines[0], "\x1b[1m\x1b[36mHello World\x1b[0m");
        assert_eq!(lines[1], "\x1b[46mHello World\x1b[0m");
        assert_eq!(lines[4], "1, \x1b[36m2\x1b[0m, 3, \x1b[36m4\x1b[0m, 5");
        assert_eq!(lines[8], "\x1b[101mbright on background\x1b[0m");
    }
}
