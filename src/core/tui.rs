use std::env;

const MIN_BOX_WIDTH: usize = 40;
const MAX_BOX_WIDTH: usize = 78;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoxStyle {
    Blue,
    Green,
    Yellow,
    Cyan,
    Magenta,
}

pub fn terminal_width() -> usize {
    env::var("TERM_WIDTH")
        .ok()
        .and_then(|w| w.parse().ok())
        .or_else(|| env::var("COLUMNS").ok().and_then(|c| c.parse().ok()))
        .unwrap_or(80)
}

fn effective_width() -> usize {
    terminal_width().clamp(MIN_BOX_WIDTH, MAX_BOX_WIDTH)
}

/// Greedy word wrap. Blank lines in the input survive as blank lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        out.push(line);
    }
    out
}

pub fn box_top(title: &str, width: usize) -> String {
    let inner = width.saturating_sub(2);
    if title.is_empty() {
        return format!("╭{}╮", "─".repeat(inner));
    }
    let label = format!(" {} ", title);
    let label_len = label.chars().count();
    let fill = inner.saturating_sub(label_len);
    let left = fill / 2;
    format!("╭{}{}{}╮", "─".repeat(left), label, "─".repeat(fill - left))
}

pub fn box_bottom(width: usize) -> String {
    format!("╰{}╯", "─".repeat(width.saturating_sub(2)))
}

pub fn box_row(content: &str, width: usize) -> String {
    let inner = width.saturating_sub(4);
    let padding = inner.saturating_sub(content.chars().count());
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Renders a titled panel around `body`, wrapped to the terminal width.
pub fn panel(title: &str, body: &str, style: BoxStyle) -> String {
    use colored::Colorize;

    let width = effective_width();
    let paint = |s: String| match style {
        BoxStyle::Blue => s.bright_blue(),
        BoxStyle::Green => s.bright_green(),
        BoxStyle::Yellow => s.bright_yellow(),
        BoxStyle::Cyan => s.bright_cyan(),
        BoxStyle::Magenta => s.bright_magenta(),
    };

    let mut lines = vec![paint(box_top(title, width)).bold().to_string()];
    for row in wrap_text(body.trim_matches('\n'), width.saturating_sub(4)) {
        lines.push(paint(box_row(&row, width)).to_string());
    }
    lines.push(paint(box_bottom(width)).to_string());
    lines.join("\n")
}

pub fn render_panel(title: &str, body: &str, style: BoxStyle) {
    println!("{}", panel(title, body, style));
}

pub fn print_error_line(message: &str) {
    use colored::Colorize;
    println!("{}", message.red());
}

pub fn print_dim(message: &str) {
    use colored::Colorize;
    println!("{}", message.dimmed());
}

pub fn print_label(label: &str) {
    use colored::Colorize;
    println!("{}", label.yellow().bold());
}

pub fn print_section(title: &str) {
    use colored::Colorize;
    println!();
    println!("{}", title.bold());
    println!("{}", "=".repeat(title.chars().count()));
}
