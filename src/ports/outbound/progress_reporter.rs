/// ProgressReporter port for user-facing status messages
///
/// This port abstracts progress reporting (e.g., to stderr) so the
/// resolution chain and follow-up calls can tell the user what happened,
/// itemized per call.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports progress through a sequence of follow-up calls
    ///
    /// # Arguments
    /// * `current` - Number of calls issued so far
    /// * `total` - Total number of calls planned
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
