/// Backend runtime
/// Owns the session context and answers every bridge operation.
/// Results are plain Rust values here; `bridge::ffi` turns them into
/// owned C strings.

use super::config::Config;
use super::console::Console;
use super::filesystem;
use crate::error::ShellResult;
use std::path::PathBuf;

pub const FILE_LIST_SEPARATOR: char = '|';

pub struct Backend {
    config: Config,
    console: Console,
}

impl Backend {
    /// Open the backend rooted at `root`, or at the default shell root
    pub fn open(root: Option<PathBuf>) -> ShellResult<Self> {
        let root = match root {
            Some(root) => root,
            None => Config::default_root()?,
        };
        log::info!("Initializing backend at {}", root.display());

        Ok(Self {
            config: Config::open(root)?,
            console: Console::new(),
        })
    }

    pub fn username(&self) -> Option<String> {
        non_empty(&self.config.username)
    }

    pub fn set_username(&mut self, name: &str) {
        if let Err(e) = self.config.change_username(name) {
            log::warn!("Failed to save username: {}", e);
        }
    }

    pub fn current_directory(&self) -> String {
        self.config.current_dir.display().to_string()
    }

    pub fn execute_console_command(&mut self, line: &str) -> Option<String> {
        let output = self.console.execute(&mut self.config, line);
        non_empty(&output)
    }

    /// Current directory entries joined with `|`
    pub fn file_list(&self) -> String {
        match filesystem::list_files(&self.config) {
            Ok(files) => files.join(&FILE_LIST_SEPARATOR.to_string()),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub fn change_wallpaper(&mut self, path: &str) {
        if let Err(e) = self.config.change_wallpaper(path) {
            log::warn!("Failed to save wallpaper: {}", e);
        }
    }

    pub fn wallpaper_path(&self) -> Option<String> {
        non_empty(&self.config.wallpaper)
    }

    pub fn create_text_file(&self, name: &str, content: &str) -> String {
        match filesystem::create_text_file(&self.config, name, content) {
            Ok(()) => "File created".to_string(),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub fn read_text_file(&self, name: &str) -> String {
        filesystem::read_text_file(&self.config, name).unwrap_or_else(|e| format!("Error: {}", e))
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_read_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = Backend::open(Some(dir.path().to_path_buf())).unwrap();

        backend.change_wallpaper("");
        assert_eq!(backend.wallpaper_path(), None);
        assert_eq!(backend.execute_console_command(""), None);
        assert_eq!(backend.username().as_deref(), Some("User"));
    }

    #[test]
    fn file_list_is_pipe_separated() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Backend::open(Some(dir.path().to_path_buf())).unwrap();

        let list = backend.file_list();
        assert!(list.contains("Documents (dir)|Downloads (dir)"));
        assert!(!list.ends_with('|'));
    }

    #[test]
    fn read_missing_file_reports_error_text() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Backend::open(Some(dir.path().to_path_buf())).unwrap();
        assert!(backend.read_text_file("nope").starts_with("Error: "));
        assert_eq!(backend.create_text_file("yes", "1"), "File created");
        assert_eq!(backend.read_text_file("yes"), "1");
    }
}
