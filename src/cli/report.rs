//! Report formatting and printing utilities.
//!
//! Kept apart from the engine so lexi can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{ExtractError, processor::ExtractionOutcome, usage::ResolvedUsage};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// `path` relative to `root` when inside it, with `/` separators.
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

pub fn print_extraction(outcome: &ExtractionOutcome, root: &Path, apply: bool) {
    print_extraction_to(outcome, root, apply, &mut io::stdout().lock());
}

pub fn print_extraction_to<W: Write>(
    outcome: &ExtractionOutcome,
    root: &Path,
    apply: bool,
    writer: &mut W,
) {
    let headline = if outcome.reused {
        format!("Reused existing key for \"{}\"", outcome.value)
    } else if apply {
        format!("Extracted \"{}\"", outcome.value)
    } else {
        format!("Would extract \"{}\"", outcome.value)
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), headline.green());

    let file = display_path(root, &outcome.locale_file);
    let file_note = match outcome.action {
        Some(action) => format!("{} ({})", file, action.as_str()),
        None => file,
    };
    let _ = writeln!(writer, "  {} {}", "key:".bold(), outcome.key);
    let _ = writeln!(writer, "  {} {}", "file:".bold(), file_note);
    let _ = writeln!(writer, "  {} {}", "call:".bold(), outcome.replacement);

    if !apply {
        let _ = writeln!(
            writer,
            "\n{} dry run, nothing was written (use {} to write)",
            "note:".bold().cyan(),
            "--apply".cyan()
        );
    }
}

/// Print every usage in cargo style, with the source line and a caret.
pub fn print_usages(file: &str, source: &str, usages: &[ResolvedUsage], root: &Path) {
    print_usages_to(file, source, usages, root, &mut io::stdout().lock());
}

pub fn print_usages_to<W: Write>(
    file: &str,
    source: &str,
    usages: &[ResolvedUsage],
    root: &Path,
    writer: &mut W,
) {
    if usages.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No I18n.t keys in {}", file).green()
        );
        return;
    }

    let lines: Vec<&str> = source.lines().collect();
    let width = usages
        .iter()
        .map(|usage| usage.line.to_string().len())
        .max()
        .unwrap_or(1);

    for usage in usages {
        let status = if usage.is_found() {
            "key".bold().green()
        } else {
            "missing".bold().red()
        };
        let _ = writeln!(writer, "{}: {}", status, usage.key);
        let _ = writeln!(
            writer,
            "{:>width$} {} {}:{}:{}",
            "",
            "-->".blue(),
            file,
            usage.line,
            usage.col,
            width = width
        );

        if let Some(source_line) = lines.get(usage.line - 1) {
            let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                usage.line.to_string().blue(),
                "|".blue(),
                source_line,
                width = width
            );
            let prefix: String = source_line.chars().take(usage.col - 1).collect();
            let padding = UnicodeWidthStr::width(prefix.as_str());
            let caret = if usage.is_found() {
                "^".green()
            } else {
                "^".red()
            };
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret,
                width = width,
                padding = padding
            );
        }

        match (&usage.value, &usage.locale_file) {
            (Some(value), Some(locale_file)) => {
                let location = match usage.locale_line {
                    Some(line) => format!("{}:{}", display_path(root, locale_file), line),
                    None => display_path(root, locale_file),
                };
                let _ = writeln!(
                    writer,
                    "{:>width$} {} {} {}",
                    "",
                    "=".blue(),
                    "value:".bold(),
                    value,
                    width = width
                );
                let _ = writeln!(
                    writer,
                    "{:>width$} {} {} {}",
                    "",
                    "=".blue(),
                    "defined:".bold(),
                    location,
                    width = width
                );
            }
            _ => {
                let _ = writeln!(
                    writer,
                    "{:>width$} {} {} {}",
                    "",
                    "=".blue(),
                    "note:".bold(),
                    "not found in any locale file".dimmed(),
                    width = width
                );
            }
        }
        let _ = writeln!(writer);
    }

    let missing = usages.iter().filter(|usage| !usage.is_found()).count();
    if missing > 0 {
        let _ = writeln!(
            writer,
            "{} {} of {} {} not found",
            FAILURE_MARK.red(),
            missing,
            usages.len(),
            if usages.len() == 1 { "key" } else { "keys" }
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} {} found",
                usages.len(),
                if usages.len() == 1 { "key" } else { "keys" }
            )
            .green()
        );
    }
}

/// Print `key = value` and where it is defined.
pub fn print_definition(key: &str, value: &str, file: &Path, line: Option<usize>, root: &Path) {
    let location = match line {
        Some(line) => format!("{}:{}", display_path(root, file), line),
        None => display_path(root, file),
    };
    println!("{} {} = {}", SUCCESS_MARK.green(), key.bold(), value);
    println!("  {} {}", "-->".blue(), location);
}

pub fn print_not_found(what: &str) {
    println!("{} {}", FAILURE_MARK.red(), format!("{} not found", what).red());
}

/// One-line notice for outcomes that are not errors.
pub fn print_notice(err: &ExtractError) {
    eprintln!("{} {}", "note:".bold().cyan(), err);
}
