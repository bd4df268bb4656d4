/// Output format enumeration for build reports
///
/// Both the CLI (inbound adapter) and the formatters (outbound adapters)
/// need to understand this, so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain terminal text with coloured ratings (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Markdown tables
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'json' or 'markdown'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("markdown").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("Md").unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("yaml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("yaml"));
        assert!(error.contains("markdown"));
    }

    #[test]
    fn test_output_format_from_str_empty() {
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
