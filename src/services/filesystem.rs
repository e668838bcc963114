/// Filesystem helper
/// Every operation works relative to the config's current directory and
/// never leaves the shell root.

use super::config::Config;
use crate::error::{ShellError, ShellResult};
use std::fs;
use std::path::{Component, Path, PathBuf};

const TEXT_EXTENSION: &str = ".txt";

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn with_text_extension(name: &str) -> String {
    if name.ends_with(TEXT_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, TEXT_EXTENSION)
    }
}

/// Join a plain entry name onto the current directory.
/// Absolute names and `..` components are refused.
fn entry_path(config: &Config, name: &str) -> ShellResult<PathBuf> {
    let escapes = Path::new(name)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    let path = config.current_dir.join(name);
    if escapes {
        return Err(ShellError::OutsideRoot(path));
    }
    Ok(path)
}

/// Entries of the current directory as `"<name> (dir|file)"`, sorted by name
pub fn list_files(config: &Config) -> ShellResult<Vec<String>> {
    let mut entries = fs::read_dir(&config.current_dir)?
        .filter_map(|e| e.ok())
        .map(|e| {
            let kind = match e.file_type() {
                Ok(t) if t.is_dir() => "dir",
                _ => "file",
            };
            (e.file_name().to_string_lossy().into_owned(), kind)
        })
        .collect::<Vec<_>>();

    entries.sort();
    Ok(entries
        .into_iter()
        .map(|(name, kind)| format!("{} ({})", name, kind))
        .collect())
}

pub fn change_directory(config: &mut Config, path: &str) -> ShellResult<()> {
    let root = canonical(&config.root_dir);

    if path == ".." {
        let current = canonical(&config.current_dir);
        if let Some(parent) = current.parent() {
            if current != root && parent.starts_with(&root) {
                config.current_dir = parent.to_path_buf();
            }
        }
        return Ok(());
    }

    let target = if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        config.current_dir.join(path)
    };

    let resolved = fs::canonicalize(&target)?;
    if !resolved.starts_with(&root) {
        return Err(ShellError::OutsideRoot(target));
    }
    if !resolved.is_dir() {
        return Err(ShellError::NotADirectory(target));
    }

    config.current_dir = resolved;
    Ok(())
}

pub fn create_text_file(config: &Config, name: &str, content: &str) -> ShellResult<()> {
    let path = entry_path(config, &with_text_extension(name))?;
    fs::write(path, content)?;
    Ok(())
}

pub fn read_text_file(config: &Config, name: &str) -> ShellResult<String> {
    let path = entry_path(config, &with_text_extension(name))?;
    Ok(fs::read_to_string(path)?)
}

pub fn delete_file(config: &Config, name: &str) -> ShellResult<()> {
    let path = entry_path(config, name)?;
    fs::remove_file(path)?;
    Ok(())
}

pub fn create_directory(config: &Config, name: &str) -> ShellResult<()> {
    let path = entry_path(config, name)?;
    fs::create_dir(path)?;
    Ok(())
}

pub fn copy_file(config: &Config, src: &str, dst: &str) -> ShellResult<()> {
    let from = entry_path(config, src)?;
    let to = entry_path(config, dst)?;
    fs::copy(from, to)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path());
        (dir, config)
    }

    #[test]
    fn list_marks_directories_and_sorts() {
        let (dir, config) = scratch();
        fs::create_dir(dir.path().join("notes")).unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();

        let files = list_files(&config).unwrap();
        assert_eq!(files, vec!["a.txt (file)", "notes (dir)"]);
    }

    #[test]
    fn text_files_get_extension_appended() {
        let (dir, config) = scratch();
        create_text_file(&config, "todo", "buy milk").unwrap();

        assert!(dir.path().join("todo.txt").exists());
        assert_eq!(read_text_file(&config, "todo").unwrap(), "buy milk");
        assert_eq!(read_text_file(&config, "todo.txt").unwrap(), "buy milk");
    }

    #[test]
    fn cd_up_never_leaves_root() {
        let (dir, mut config) = scratch();
        fs::create_dir(dir.path().join("Documents")).unwrap();

        change_directory(&mut config, "Documents").unwrap();
        assert!(config.current_dir.ends_with("Documents"));

        change_directory(&mut config, "..").unwrap();
        assert_eq!(config.current_dir, canonical(dir.path()));

        change_directory(&mut config, "..").unwrap();
        assert_eq!(config.current_dir, canonical(dir.path()));
    }

    #[test]
    fn cd_rejects_outside_and_files() {
        let (dir, mut config) = scratch();
        fs::write(dir.path().join("plain.txt"), "").unwrap();

        assert!(matches!(
            change_directory(&mut config, "plain.txt"),
            Err(ShellError::NotADirectory(_))
        ));
        assert!(matches!(
            change_directory(&mut config, "/"),
            Err(ShellError::OutsideRoot(_))
        ));
        assert!(matches!(
            change_directory(&mut config, "missing"),
            Err(ShellError::Io(_))
        ));
    }

    #[test]
    fn entry_names_cannot_escape() {
        let (_dir, config) = scratch();
        assert!(matches!(
            create_text_file(&config, "../evil", "x"),
            Err(ShellError::OutsideRoot(_))
        ));
        assert!(delete_file(&config, "/etc/passwd").is_err());
    }

    #[test]
    fn copy_delete_and_mkdir() {
        let (dir, config) = scratch();
        fs::write(dir.path().join("a.txt"), "data").unwrap();

        copy_file(&config, "a.txt", "b.txt").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("b.txt")).unwrap(), "data");

        delete_file(&config, "a.txt").unwrap();
        assert!(!dir.path().join("a.txt").exists());

        create_directory(&config, "music").unwrap();
        assert!(dir.path().join("music").is_dir());
    }
}
