/// ProgressReporter port for reporting progress during a check
///
/// Progress goes to a side channel (stderr) so that stdout only ever
/// carries the report.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports which analysis stage is running
    ///
    /// # Arguments
    /// * `current` - 1-based stage number
    /// * `total` - Number of stages
    /// * `message` - Optional stage description
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the check
    fn report_completion(&self, message: &str);
}
