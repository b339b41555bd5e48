//! Splits ProTracker modules into song and sample files.
//!
//! The song file holds the header, song positions and patterns. The sample
//! file holds the raw sample data, which a replay routine on the Amiga wants
//! in Chip RAM. A small assembler include records both sizes.

use anyhow::{Context, Result};
use splitmod::{Layout, ProTrackerModule};
use std::path::Path;

pub mod artifacts;
pub mod options;

pub use artifacts::{include_text, write_artifact, ArtifactPaths};
pub use options::SplitOptions;

/// What a successful split produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Where the input was divided
    pub layout: Layout,
    /// The files that were written
    pub paths: ArtifactPaths,
}

/// Read the module at `input` and write its three artifacts.
///
/// Stops at the first failure. Artifacts are written in the order song,
/// samples, include, and any not yet reached are left alone.
pub fn split_file(input: &Path, options: &SplitOptions) -> Result<SplitReport> {
    let data =
        std::fs::read(input).with_context(|| format!("Cannot read '{}'", input.display()))?;
    tracing::debug!(path = %input.display(), bytes = data.len(), "module loaded");
    let paths = ArtifactPaths::for_input(input, options.out_dir.as_deref())?;
    split_bytes(&data, &paths, options)
        .with_context(|| format!("Cannot split '{}'", input.display()))
}

/// Split a module already in memory into the files named by `paths`.
pub fn split_bytes(
    data: &[u8],
    paths: &ArtifactPaths,
    options: &SplitOptions,
) -> Result<SplitReport> {
    let module = ProTrackerModule::new(data)?;
    let layout = module.layout();
    tracing::debug!(
        name = %String::from_utf8_lossy(module.song_name()),
        signature = %module.signature(),
        song_length = module.song_length(),
        patterns = layout.pattern_count,
        samples_offset = layout.samples.offset,
        "module analysed"
    );
    if layout.samples.is_empty() {
        tracing::warn!("module has no sample data, the sample file will be empty");
    }

    let (song, samples) = module.split();

    write_artifact(&paths.song, song)?;
    if !options.quiet {
        println!(
            "Written song data: {} ({} bytes).",
            paths.song.display(),
            song.len()
        );
    }

    write_artifact(&paths.samples, samples)?;
    if !options.quiet {
        println!(
            "Written sample data: {} ({} bytes).",
            paths.samples.display(),
            samples.len()
        );
    }

    let include = include_text(&layout);
    write_artifact(&paths.include, include.as_bytes())?;
    if !options.quiet {
        println!(
            "Written assembler include: {} ({} bytes).",
            paths.include.display(),
            include.len()
        );
    }

    Ok(SplitReport {
        layout,
        paths: paths.clone(),
    })
}
