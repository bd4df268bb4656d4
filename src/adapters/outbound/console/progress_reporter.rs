use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so diagnostics never mix with the report on stdout.
/// In quiet mode only warnings are printed.
#[derive(Debug, Clone, Copy)]
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn with_quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_warning(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}
