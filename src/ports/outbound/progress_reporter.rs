/// ProgressReporter port for user-facing diagnostics
///
/// Keeps informational and warning messages off stdout, which carries
/// the formatted report.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a warning; the operation continues
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
