//! Styled terminal helpers.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Render a section header, e.g. `=== Comparison ===`.
#[must_use]
pub fn header(text: &str) -> String {
    let plain = format!("=== {text} ===");
    if is_color_disabled() {
        plain
    } else {
        style(plain).bold().cyan().to_string()
    }
}

/// Render a status tag for a solver row: `[OK]` or `[ERROR]`.
#[must_use]
pub fn status_tag(ok: bool) -> String {
    let tag = if ok { "[OK]" } else { "[ERROR]" };
    if is_color_disabled() {
        tag.to_string()
    } else if ok {
        style(tag).green().bold().to_string()
    } else {
        style(tag).red().bold().to_string()
    }
}

/// Print a warning to stderr.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
