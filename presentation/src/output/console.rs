//! Console output formatter for count results

use colored::Colorize;
use factcount_domain::{FactError, OutputFormat, WordCount};

/// Formats count results and failures for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors on or off for everything rendered afterwards
    pub fn set_color_enabled(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Render a result in the requested format
    pub fn render(result: &WordCount, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(result),
            OutputFormat::Count => Self::format_count(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the complete result
    pub fn format(result: &WordCount) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} {} {} ({} mode)\n\n",
            format!("'{}'", result.word).yellow().bold(),
            "occurs".dimmed(),
            result.count.to_string().green().bold(),
            Self::times(result.count).dimmed(),
            result.mode
        ));

        output.push_str(&format!("{} {}\n", "Fact:".cyan().bold(), result.fact.trim()));

        output
    }

    /// Format the count alone
    pub fn format_count(result: &WordCount) -> String {
        result.count.to_string()
    }

    /// Format as JSON
    pub fn format_json(result: &WordCount) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a failure for stderr
    pub fn format_error(error: &FactError) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    fn times(count: usize) -> &'static str {
        if count == 1 { "time" } else { "times" }
    }
}
