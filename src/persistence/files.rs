use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the flowstate directory - checks for a local .flowstate first,
/// then falls back to the global ~/.flowstate
pub fn get_flow_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_flow_dir(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".flowstate"))
}

/// Find a local .flowstate directory by walking up the directory tree
fn find_local_flow_dir(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let flow_dir = current.join(".flowstate");
        if flow_dir.exists() && flow_dir.is_dir() {
            return Some(flow_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the flowstate directory exists
pub fn ensure_flow_dir() -> Result<PathBuf> {
    let dir = get_flow_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .flowstate directory in the current directory
pub fn init_local_flow_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let flow_dir = current_dir.join(".flowstate");

    if flow_dir.exists() {
        anyhow::bail!("Flowstate directory already exists: {}", flow_dir.display());
    }

    fs::create_dir_all(&flow_dir)
        .with_context(|| format!("Failed to create directory: {}", flow_dir.display()))?;

    Ok(flow_dir)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}
