//! Terminal styling helpers for table output.

use crossterm::style::Stylize;

/// Display width of a string; non-ASCII glyphs count as two cells.
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

/// Print a boxed header.
pub fn print_header(title: &str) {
    let inner_width: usize = 58;
    let total_padding = inner_width.saturating_sub(display_width(title));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;

    println!();
    println!("{}", format!("╔{}╗", "═".repeat(inner_width)).dark_cyan());
    println!(
        "{}",
        format!("║{}{}{}║", " ".repeat(left_pad), title, " ".repeat(right_pad)).dark_cyan()
    );
    println!("{}", format!("╚{}╝", "═".repeat(inner_width)).dark_cyan());
    println!();
}

/// Print a small section title.
pub fn print_section(title: &str) {
    println!();
    println!("  {} {}", "▸".dark_cyan(), title.white().bold());
    println!("  {}", "─".repeat(50).dark_grey());
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a key-value pair.
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<22} {}", format!("{}:", key).dark_grey(), value);
}

/// Print a key-value pair with colored value.
pub fn print_kv_colored(key: &str, value: &str, color: KvColor) {
    let styled = match color {
        KvColor::Green => value.green().to_string(),
        KvColor::Red => value.red().to_string(),
        KvColor::Cyan => value.cyan().to_string(),
    };
    println!("  {:<22} {}", format!("{}:", key).dark_grey(), styled);
}

/// Colors available to [`print_kv_colored`].
#[derive(Clone, Copy)]
pub enum KvColor {
    Green,
    Red,
    Cyan,
}

/// Print a table header row followed by a separator.
pub fn print_table_header(columns: &[(&str, usize)]) {
    let header: String = columns
        .iter()
        .map(|(name, width)| format!("{:<width$}", name, width = width))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {}", header.white().bold());
    let separator: String = columns
        .iter()
        .map(|(_, width)| "─".repeat(*width))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {}", separator.dark_grey());
}

/// Print a table row padded to the header widths.
pub fn print_table_row(columns: &[(&str, usize)]) {
    let row: String = columns
        .iter()
        .map(|(val, width)| format!("{:<width$}", val, width = width))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {}", row);
}

/// Print a dimmed placeholder for empty results.
pub fn print_empty(msg: &str) {
    println!();
    println!("  {}", msg.dark_grey().italic());
    println!();
}

/// Print a hint line.
pub fn print_hint(msg: &str) {
    println!("  {} {}", "💡".yellow(), msg.dark_grey());
}

/// Two-decimal score, as shown on the dashboard.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

pub fn format_active(active: bool) -> String {
    if active {
        "● Active".green().to_string()
    } else {
        "○ Inactive".dark_grey().to_string()
    }
}
