#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Quiet level; 1 hides headers, 2 also hides per-item details.
    pub quiet: u8,
    /// Suppresses the startup banner.
    pub no_banner: bool,
    /// Verbosity requested on the command line, 0 being the default.
    pub verbose: u8,
    /// Overrides the copier's adaptive buffer sizing when set.
    ///
    /// Zero is treated the same as unset.
    pub buffer_size: Option<usize>,
}

impl Config {
    /// Returns the explicit buffer size, ignoring a zero override.
    pub fn buffer_size(&self) -> Option<usize> {
        self.buffer_size.filter(|size| *size > 0)
    }

    /// Default `tracing` directive derived from the quiet and verbose levels.
    pub fn log_directive(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (q, _) if q > 1 => "error",
            (1, _) => "warn",
            (_, 0) => "info",
            (_, 1) => "debug",
            _ => "trace",
        }
    }
}
