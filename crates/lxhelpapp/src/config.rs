//! # Configuration
//!
//! lxhelp configuration is loaded with [`confique`], layering environment
//! variables over TOML files over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `LXHELP_COPY_FEEDBACK_MS`, `LXHELP_CLIPBOARD_COMMAND`, `LXHELP_COLOR`.
//! 2. **Project Config**: `.lxhelp/lxhelp.toml` in the working directory.
//! 3. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `copy_feedback_ms` | `2000` | How long "Copied!" is shown after a copy |
//! | `clipboard_command` | unset | Command line that receives copied text on stdin, e.g. `"wl-copy -n"` |
//! | `color` | `true` | Colored terminal output |

use crate::error::{LxError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "lxhelp.toml";
pub const PROJECT_DIR: &str = ".lxhelp";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LxConfig {
    /// Milliseconds a copy button shows "Copied!".
    #[config(default = 2000, env = "LXHELP_COPY_FEEDBACK_MS")]
    pub copy_feedback_ms: u64,

    /// Overrides the platform clipboard tool. Split like a shell would.
    #[config(env = "LXHELP_CLIPBOARD_COMMAND")]
    pub clipboard_command: Option<String>,

    #[config(default = true, env = "LXHELP_COLOR")]
    pub color: bool,
}

impl Default for LxConfig {
    fn default() -> Self {
        Self {
            copy_feedback_ms: 2000,
            clipboard_command: None,
            color: true,
        }
    }
}

impl LxConfig {
    /// Loads from the environment, then `project_dir`, then `global_dir`.
    pub fn load(project_dir: Option<&Path>, global_dir: Option<&Path>) -> Result<Self> {
        let mut builder = LxConfig::builder().env();
        if let Some(dir) = project_dir {
            builder = builder.file(dir.join(CONFIG_FILE));
        }
        if let Some(dir) = global_dir {
            builder = builder.file(dir.join(CONFIG_FILE));
        }
        builder
            .load()
            .map_err(|e| LxError::Config(e.to_string()))
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// The clipboard override split into argv, if one is set and non-blank.
    pub fn clipboard_argv(&self) -> Result<Option<Vec<String>>> {
        let Some(command) = self.clipboard_command.as_deref() else {
            return Ok(None);
        };
        let argv = shell_words::split(command)
            .map_err(|e| LxError::Config(format!("clipboard_command: {}", e)))?;
        Ok((!argv.is_empty()).then_some(argv))
    }
}

/// `<cwd>/.lxhelp`
pub fn project_dir(cwd: &Path) -> PathBuf {
    cwd.join(PROJECT_DIR)
}

/// Per-user config directory, when the platform has one.
pub fn global_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "lxhelp", "lxhelp").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LxConfig::default();
        assert_eq!(config.copy_feedback(), Duration::from_millis(2000));
        assert_eq!(config.clipboard_command, None);
        assert!(config.color);
    }

    #[test]
    fn test_project_file_overrides_global_file() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let global = temp.path().join("global");
        fs::create_dir_all(&project).unwrap();
        fs::create_dir_all(&global).unwrap();
        fs::write(project.join(CONFIG_FILE), "copy_feedback_ms = 750\n").unwrap();
        fs::write(
            global.join(CONFIG_FILE),
            "copy_feedback_ms = 3000\ncolor = false\n",
        )
        .unwrap();

        let config = LxConfig::load(Some(&project), Some(&global)).unwrap();
        assert_eq!(config.copy_feedback_ms, 750);
        assert!(!config.color);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let config = LxConfig::load(Some(&temp.path().join("nope")), None).unwrap();
        assert_eq!(config.copy_feedback_ms, 2000);
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "copy_feedback_ms = \"soon\"\n").unwrap();
        let err = LxConfig::load(Some(temp.path()), None).unwrap_err();
        assert!(matches!(err, LxError::Config(_)));
    }

    #[test]
    fn test_clipboard_argv_splits_like_a_shell() {
        let config = LxConfig {
            clipboard_command: Some("xclip -selection 'clip board'".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.clipboard_argv().unwrap(),
            Some(vec![
                "xclip".to_string(),
                "-selection".to_string(),
                "clip board".to_string()
            ])
        );
    }

    #[test]
    fn test_blank_clipboard_command_is_ignored() {
        let config = LxConfig {
            clipboard_command: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.clipboard_argv().unwrap(), None);
    }

    #[test]
    fn test_unbalanced_quotes_are_rejected() {
        let config = LxConfig {
            clipboard_command: Some("xclip 'oops".to_string()),
            ..Default::default()
        };
        assert!(config.clipboard_argv().is_err());
    }
}
