/// Port for operator-facing progress output.
pub trait ProgressReporter {
    /// Announce step `index` of `total`.
    fn step(&mut self, index: usize, total: usize, message: &str);

    /// Secondary detail under the current step.
    fn detail(&mut self, message: &str);
}
