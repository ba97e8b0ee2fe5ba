//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Write section header (cyan bold)
pub fn header(out: &mut impl Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg.to_string().cyan().bold())
}

/// Write notice that something is not there yet (yellow)
pub fn pending(out: &mut impl Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg.to_string().yellow())
}

/// Write indented detail (no color)
pub fn detail(out: &mut impl Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "  {}", msg)
}

/// Write plain output (no color)
pub fn info(out: &mut impl Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg)
}

/// Write an empty line
pub fn blank(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)
}
