/// Configuration settings for an origin-rotation run.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use circstart_core::config::CircstartConfig;
///
/// let config = CircstartConfig::default();
/// assert!(!config.quiet);
/// ```
///
/// ## Strict batch runs
///
/// ```rust
/// use circstart_core::config::CircstartConfig;
///
/// let config = CircstartConfig {
///     strict: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct CircstartConfig {
    /// Suppress diagnostics and the completion summary on stderr.
    ///
    /// Warnings are always retained in the [`RotationReport`] so library
    /// callers can audit a run without capturing stderr.
    ///
    /// **Default**: `false`
    ///
    /// [`RotationReport`]: crate::results::RotationReport
    pub quiet: bool,

    /// Treat recorded data-quality warnings as a run failure.
    ///
    /// When `true`, a run that recorded any warning (malformed feature
    /// lines, unsorted features, identifiers without a trimmed sequence,
    /// sequences with no legal rotation point) exits with an error after
    /// the report is assembled.
    ///
    /// **Default**: `false`
    pub strict: bool,
}
