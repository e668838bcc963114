/// Config store
/// Persisted backend state, kept as `config.json` under the shell root

use crate::error::{ShellError, ShellResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the default shell root
pub const ROOT_ENV: &str = "DESKSHELL_HOME";

const DEFAULT_FOLDERS: [&str; 5] = ["Documents", "Downloads", "Pictures", "Music", "Videos"];

const WELCOME_TEXT: &str = "Welcome to DeskShell!\n\n\
This is your new desktop. Open a panel from the tab bar to get started.\n\n\
Type 'help' in the console for a list of commands.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub wallpaper: String,
    pub root_dir: PathBuf,
    pub current_dir: PathBuf,
    #[serde(default)]
    pub default_apps: BTreeMap<String, String>,
}

impl Config {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        let root_dir = root_dir.into();
        let default_apps = [("browser", "internal"), ("fileExch", "internal"), ("calc", "internal")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            username: String::new(),
            wallpaper: String::new(),
            current_dir: root_dir.clone(),
            root_dir,
            default_apps,
        }
    }

    /// Resolve the shell root: `DESKSHELL_HOME`, else `<home>/DeskShell`
    pub fn default_root() -> ShellResult<PathBuf> {
        if let Ok(root) = std::env::var(ROOT_ENV) {
            if !root.is_empty() {
                return Ok(PathBuf::from(root));
            }
        }

        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| ShellError::NoHomeDirectory)?;

        Ok(Path::new(&home).join("DeskShell"))
    }

    /// Open the config under `root`, creating the root and defaults on first run
    pub fn open(root: impl Into<PathBuf>) -> ShellResult<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root)?;
        }

        let mut config = Self::new(&root);
        if let Err(e) = config.load() {
            log::info!("Loading default configuration ({})", e);
            config.set_default();
            config.save()?;
        }
        Ok(config)
    }

    fn path(&self) -> PathBuf {
        self.root_dir.join(CONFIG_FILE)
    }

    /// Default username and wallpaper plus the standard folder layout
    pub fn set_default(&mut self) {
        self.username = "User".to_string();
        self.wallpaper = "default.jpg".to_string();

        for name in DEFAULT_FOLDERS {
            let dir = self.root_dir.join(name);
            if !dir.exists() {
                if let Err(e) = fs::create_dir(&dir) {
                    log::warn!("Failed to create {}: {}", dir.display(), e);
                }
            }
        }

        let welcome = self.root_dir.join("Documents").join("welcome.txt");
        if let Err(e) = fs::write(&welcome, WELCOME_TEXT) {
            log::warn!("Failed to write {}: {}", welcome.display(), e);
        }
    }

    pub fn load(&mut self) -> ShellResult<()> {
        let data = fs::read_to_string(self.path())?;
        *self = serde_json::from_str(&data)?;
        Ok(())
    }

    pub fn save(&self) -> ShellResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(self.path(), data)?;
        Ok(())
    }

    pub fn change_username(&mut self, name: &str) -> ShellResult<()> {
        self.username = name.to_string();
        self.save()
    }

    pub fn change_wallpaper(&mut self, path: &str) -> ShellResult<()> {
        self.wallpaper = path.to_string();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_open_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::open(dir.path()).unwrap();

        assert_eq!(config.username, "User");
        assert_eq!(config.wallpaper, "default.jpg");
        assert_eq!(config.current_dir, dir.path());
        assert!(dir.path().join(CONFIG_FILE).exists());
        assert!(dir.path().join("Documents").join("welcome.txt").exists());
        assert_eq!(config.default_apps.get("calc").map(String::as_str), Some("internal"));
    }

    #[test]
    fn changes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::open(dir.path()).unwrap();
        config.change_username("alice").unwrap();
        config.change_wallpaper("/tmp/sea.png").unwrap();

        let reopened = Config::open(dir.path()).unwrap();
        assert_eq!(reopened.username, "alice");
        assert_eq!(reopened.wallpaper, "/tmp/sea.png");
    }

    #[test]
    fn saved_json_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::open(dir.path()).unwrap();
        config.save().unwrap();

        let raw = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.get("rootDir").is_some());
        assert!(value.get("currentDir").is_some());
        assert!(value.get("defaultApps").is_some());
    }

    #[test]
    fn corrupt_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();

        let config = Config::open(dir.path()).unwrap();
        assert_eq!(config.username, "User");
    }
}
