use std::path::{Path, PathBuf};

/// Tuning program location relative to the driver's install directory.
pub const TUNER_RELATIVE_PATH: &str = "../src/tuning/tune_sota_models.py";

/// Resolves the absolute, symlink-free directory that contains `exe`.
///
/// A relative `exe` is resolved against the current working directory, so
/// this must run before anything changes it.
pub fn resolve_base_path(exe: &Path) -> Result<PathBuf, String> {
    let dir = match exe.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let resolved = std::fs::canonicalize(dir).map_err(|err| {
        format!("failed to resolve base path from {}: {}", exe.display(), err)
    })?;

    if resolved.as_os_str().is_empty() {
        return Err(format!("base path for {} resolved to an empty path", exe.display()));
    }
    Ok(resolved)
}

pub fn tuner_script_path(base_path: &Path) -> PathBuf {
    base_path.join(TUNER_RELATIVE_PATH)
}
