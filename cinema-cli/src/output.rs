//! Terminal output helpers.

use owo_colors::OwoColorize;
use std::fmt::Display;
use std::io::IsTerminal;

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    if use_color() {
        println!("{}: {}", label.bright_cyan(), value);
    } else {
        println!("{label}: {value}");
    }
}

/// Print a section heading
pub fn print_heading(text: &str) {
    if use_color() {
        println!("{}", text.bold());
    } else {
        println!("{text}");
    }
}

/// Joins a command line for display, single-quoting arguments the shell
/// would otherwise split or interpret.
pub fn format_command_line(args: &[String]) -> String {
    args.iter()
        .map(|arg| shell_quote(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.,:=/+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
