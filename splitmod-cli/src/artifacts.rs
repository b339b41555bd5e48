//! The three files produced for each module.

use anyhow::{anyhow, Context, Result};
use splitmod::Layout;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the song, sample and include files for one input go.
///
/// Each name is the input name with an extension appended, so `tune.mod`
/// becomes `tune.mod.trk`, `tune.mod.smp` and `tune.mod.smp.i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Header and pattern data
    pub song: PathBuf,
    /// Raw sample data
    pub samples: PathBuf,
    /// Assembler include with both sizes
    pub include: PathBuf,
}

impl ArtifactPaths {
    /// Work out the artifact names for `input`, optionally moved into `out_dir`.
    pub fn for_input(input: &Path, out_dir: Option<&Path>) -> Result<ArtifactPaths> {
        let base = match out_dir {
            Some(dir) => {
                let name = input
                    .file_name()
                    .ok_or_else(|| anyhow!("'{}' does not name a file", input.display()))?;
                dir.join(name)
            }
            None => input.to_path_buf(),
        };
        Ok(ArtifactPaths {
            song: with_suffix(&base, ".trk"),
            samples: with_suffix(&base, ".smp"),
            include: with_suffix(&base, ".smp.i"),
        })
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// The assembler include declaring both sizes, one `NAME = value` per line.
pub fn include_text(layout: &Layout) -> String {
    format!(
        "SPLITMOD_SONG_SIZE = {}\nSPLITMOD_SMP_SIZE = {}\n",
        layout.song.length, layout.samples.length
    )
}

/// Write `bytes` to `path`, or leave `path` untouched.
///
/// The data goes to a temporary file next to `path` which is renamed over it
/// once fully written.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Cannot create a temporary file in '{}'", dir.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("Cannot write '{}'", path.display()))?;
    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Cannot write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "artifact written");
    Ok(())
}
