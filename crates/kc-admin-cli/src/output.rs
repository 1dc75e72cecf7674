//! Terminal output helpers.

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use crate::config::OutputFormat;
use crate::CliResult;

/// Prints a status line marking an operation as done.
pub fn success(message: &str) {
    println!("{} {message}", "✓".green().bold());
}

/// Prints a status line marking an operation as failed.
pub fn error(message: &str) {
    eprintln!("{} {message}", "✗".red().bold());
}

/// Prints an informational status line.
pub fn info(message: &str) {
    println!("{} {message}", "ℹ".blue().bold());
}

/// Renders a result set in the chosen format.
///
/// Table mode draws a rounded-border table, or a notice when the set is
/// empty. Quiet mode prints nothing.
pub fn output<T: Tabled + serde::Serialize>(rows: &[T], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table if rows.is_empty() => info("No results."),
        OutputFormat::Table => println!("{}", Table::new(rows).with(Style::rounded())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Renders a single item in the chosen format.
///
/// Table mode prints indented key/value lines instead, since a one-row
/// table reads poorly for the wide admin representations.
pub fn output_single<T: serde::Serialize>(item: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => print_fields(&serde_json::to_value(item)?, 0),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(item)?),
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Walks a JSON value, printing nested fields two spaces deeper per level.
fn print_fields(value: &serde_json::Value, depth: usize) {
    let pad = "  ".repeat(depth);

    match value {
        serde_json::Value::Object(fields) => {
            for (key, field) in fields {
                if field.is_object() || field.is_array() {
                    println!("{pad}{key}:");
                    print_fields(field, depth + 1);
                } else {
                    println!("{pad}{key}: {}", scalar(field));
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                if item.is_object() || item.is_array() {
                    println!("{pad}-");
                    print_fields(item, depth + 1);
                } else {
                    println!("{pad}- {}", scalar(item));
                }
            }
        }
        other => println!("{pad}{}", scalar(other)),
    }
}

/// Formats a leaf value without JSON quoting.
fn scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Asks a yes/no question on stdout, defaulting to no.
pub fn confirm(question: &str) -> CliResult<bool> {
    print!("{question} [y/N]: ");
    std::io::Write::flush(&mut std::io::stdout())?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim();

    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
