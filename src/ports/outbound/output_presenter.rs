use crate::shared::Result;

/// OutputPresenter port - where the rendered report ends up
///
/// Implemented for stdout and for the `--output` file.
pub trait OutputPresenter {
    /// Writes the rendered report in full
    ///
    /// # Errors
    /// Fails when the destination cannot be written, e.g. a missing parent
    /// directory or a symlink in place of the output file.
    fn present(&self, content: &str) -> Result<()>;
}
