// SPDX-License-Identifier: MPL-2.0
//! Writes preference changes back to `settings.toml`.
//!
//! Failures are logged and otherwise ignored; the in-memory value stays
//! authoritative for the rest of the session.

use super::config::{self, Config};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Stores `mode` as the explicit theme and saves the whole config.
///
/// `base_dir` is `None` in the running app; tests point it at a temp dir.
pub fn persist_theme(config: &mut Config, mode: ThemeMode, base_dir: Option<PathBuf>) -> bool {
    config.general.theme = Some(mode);
    match config::save_with_override(config, base_dir) {
        Ok(()) => {
            tracing::debug!(?mode, "theme saved");
            true
        }
        Err(error) => {
            tracing::warn!(%error, "failed to save theme preference");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn theme_is_written_and_reloaded() {
        let dir = tempdir().expect("temp dir");
        let mut cfg = Config::default();

        assert!(persist_theme(&mut cfg, ThemeMode::Dark, Some(dir.path().to_path_buf())));

        let (reloaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(reloaded.general.theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn unwritable_target_reports_failure() {
        let dir = tempdir().expect("temp dir");
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").expect("write blocker");

        let mut cfg = Config::default();
        assert!(!persist_theme(&mut cfg, ThemeMode::Light, Some(blocker)));
        assert_eq!(cfg.general.theme, Some(ThemeMode::Light));
    }
}
