use crate::core::notify::{Notice, Notifier};
use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Result,
    Warning,
    Info,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Result => style(text).green().bold(),
        StyleType::Warning => style(text).yellow().bold(),
        StyleType::Info => style(text).cyan(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Spinner shown while waiting on the quote source. Nothing is drawn until
/// [`start_spinner`] is called.
pub fn new_spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    Ok(pb)
}

pub fn start_spinner(pb: &ProgressBar, message: &str) {
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
}

/// Prints history records, newest first, as a numbered table.
pub fn print_history(records: &[String]) {
    if records.is_empty() {
        println!("{}", style_text("No conversions yet.", StyleType::Subtle));
        return;
    }

    let mut table = new_styled_table();
    table.set_header(vec![header_cell("#"), header_cell("Conversion")]);
    for (i, record) in records.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(record)]);
    }
    println!("{table}");
}

/// Styled line for a notice, or `None` when the command prints it itself.
pub fn notice_line(notice: &Notice) -> Option<String> {
    match notice {
        Notice::ConversionDone(_) => None,
        n if n.is_warning() => Some(style_text(&format!("Warning: {n}"), StyleType::Warning)),
        n => Some(style_text(&format!("Notice: {n}"), StyleType::Info)),
    }
}

/// Writes notices to stderr so stdout carries only results.
///
/// Notices arrive while the spinner may be ticking, so they are printed with
/// the spinner suspended.
pub struct ConsoleNotifier {
    progress: ProgressBar,
}

impl ConsoleNotifier {
    pub fn new(progress: ProgressBar) -> Self {
        Self { progress }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        if let Some(line) = notice_line(&notice) {
            self.progress.suspend(|| eprintln!("{line}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::ProgressDrawTarget;

    #[test]
    fn test_notice_lines() {
        console::set_colors_enabled_stderr(false);
        console::set_colors_enabled(false);

        assert_eq!(
            notice_line(&Notice::UsingCachedQuote).as_deref(),
            Some("Notice: Using the last saved quote.")
        );
        assert_eq!(
            notice_line(&Notice::InvalidAmount).as_deref(),
            Some("Warning: Enter a valid amount.")
        );
        assert!(notice_line(&Notice::ConversionDone("1.00 ARS = 0.00 USD".to_string())).is_none());
    }

    #[test]
    fn test_notify_keeps_running_spinner() {
        let pb = new_spinner().unwrap();
        pb.set_draw_target(ProgressDrawTarget::hidden());
        start_spinner(&pb, "Fetching quote...");

        let notifier = ConsoleNotifier::new(pb.clone());
        notifier.notify(Notice::UsingDefaultQuote);
        notifier.notify(Notice::SavedToHistory);

        assert!(!pb.is_finished());
        assert_eq!(pb.message(), "Fetching quote...");
        pb.finish_and_clear();
        assert!(pb.is_finished());
    }
}
