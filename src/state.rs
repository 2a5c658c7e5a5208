use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::data::loader::load_file;
use crate::data::model::SampleLog;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File the samples came from.
    pub source: PathBuf,

    /// Loaded samples.
    pub samples: SampleLog,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load `path` once. Errors propagate so the caller can abort startup.
    pub fn load(path: &Path) -> Result<Self> {
        let samples = load_file(path)?;
        Ok(Self {
            source: path.to_path_buf(),
            samples,
            status_message: None,
        })
    }

    /// Re-read the current source file.
    pub fn reload(&mut self) {
        let path = self.source.clone();
        self.open(path);
    }

    /// Switch to `path`. On failure the previous samples stay on screen and
    /// the error is kept for the status bar.
    pub fn open(&mut self, path: PathBuf) {
        match load_file(&path) {
            Ok(samples) => {
                self.samples = samples;
                self.source = path;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Short description for the top bar.
    pub fn summary(&self) -> String {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string());
        if self.samples.is_empty() {
            format!("{name}: no samples")
        } else {
            format!("{name}: {} samples", self.samples.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_then_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos.txt");
        fs::write(&path, "20.5,1,0,20.0\n").unwrap();

        let mut state = AppState::load(&path).unwrap();
        assert_eq!(state.samples.len(), 1);
        assert_eq!(state.summary(), "datos.txt: 1 samples");

        fs::write(&path, "20.5,1,0,20.0\n21.0,0,1,20.2\n").unwrap();
        state.reload();
        assert_eq!(state.samples.len(), 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn summary_of_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos.txt");
        fs::write(&path, "").unwrap();

        let state = AppState::load(&path).unwrap();
        assert!(state.samples.is_empty());
        assert_eq!(state.summary(), "datos.txt: no samples");
    }

    #[test]
    fn failed_open_keeps_previous_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos.txt");
        fs::write(&path, "20.5,1,0,20.0\n21.0,0,1,20.2\n").unwrap();

        let mut state = AppState::load(&path).unwrap();
        state.open(dir.path().join("missing.txt"));

        assert_eq!(state.samples.len(), 2);
        assert_eq!(state.source, path);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppState::load(&dir.path().join("datos.txt")).is_err());
    }
}
