use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::BuildFormatter;

/// Factory for creating report formatters
///
/// Picks the formatter adapter for an output format so the CLI never
/// names concrete adapter types.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// `color` only affects the text formatter; JSON and Markdown never
    /// contain terminal escape codes.
    ///
    /// # Examples
    /// ```
    /// use pc_builder::application::dto::OutputFormat;
    /// use pc_builder::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn BuildFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(color)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pc_builder::application::dto::OutputFormat;
    /// use pc_builder::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating text report...",
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}
