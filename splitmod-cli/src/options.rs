//! Settings for a single conversion.

use std::path::PathBuf;

/// How a module should be split and reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Don't print a line for each artifact written. Errors are always shown.
    pub quiet: bool,
    /// Write artifacts here instead of next to the input file.
    pub out_dir: Option<PathBuf>,
}

impl SplitOptions {
    /// Options that print nothing on success
    pub fn quiet() -> SplitOptions {
        SplitOptions {
            quiet: true,
            ..SplitOptions::default()
        }
    }

    /// Redirect the artifacts into `dir`
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> SplitOptions {
        self.out_dir = Some(dir.into());
        self
    }
}
