/// Console interpreter
/// Backend side of the console panel: turns one command line into result text

use super::config::Config;
use super::filesystem;
use chrono::Local;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HELP_TEXT: &str = "Available commands:
help - show this list
info - show system information
cls - clear the console
txt - work with text files:
  - txt read <name> - print a file
  - txt write <name> <content> - write a file
  - txt list - list text files
cd <path> - change the current directory
ls - list the current directory
mkdir <name> - create a directory
rm <name> - delete a file
cp <source> <destination> - copy a file
echo <text> - print text
date - show the current date and time";

pub struct Console {
    history: Vec<String>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Every line ever executed, in order. Kept for the session only; no
    /// bridge operation exposes it.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Execute one command line. Blank input yields empty text.
    pub fn execute(&mut self, config: &mut Config, line: &str) -> String {
        self.history.push(line.to_string());

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = parts.split_first() else {
            return String::new();
        };

        log::debug!("[Console] {} ({} args)", name, args.len());

        match name {
            "help" => HELP_TEXT.to_string(),
            "info" => info(config),
            "cls" => "clear".to_string(),
            "txt" => match args.split_first() {
                Some((&action, rest)) => text_command(config, action, rest),
                None => "Usage: txt [read|write|list] [arguments]".to_string(),
            },
            "cd" => match args.first() {
                Some(path) => match filesystem::change_directory(config, path) {
                    Ok(()) => format!("Current directory: {}", config.current_dir.display()),
                    Err(e) => format!("Error changing directory: {}", e),
                },
                None => format!("Current directory: {}", config.current_dir.display()),
            },
            "ls" => list(config),
            "mkdir" => match args.first() {
                Some(dir) => match filesystem::create_directory(config, dir) {
                    Ok(()) => format!("Directory {} created", dir),
                    Err(e) => format!("Error creating directory: {}", e),
                },
                None => "Usage: mkdir <name>".to_string(),
            },
            "rm" => match args.first() {
                Some(file) => match filesystem::delete_file(config, file) {
                    Ok(()) => format!("File {} deleted", file),
                    Err(e) => format!("Error deleting file: {}", e),
                },
                None => "Usage: rm <name>".to_string(),
            },
            "cp" => match args {
                [src, dst, ..] => match filesystem::copy_file(config, src, dst) {
                    Ok(()) => format!("File {} copied to {}", src, dst),
                    Err(e) => format!("Error copying file: {}", e),
                },
                _ => "Usage: cp <source> <destination>".to_string(),
            },
            "echo" => args.join(" "),
            "date" => Local::now().format(DATE_FORMAT).to_string(),
            _ => format!(
                "Unknown command: {}. Type 'help' for a list of commands.",
                name
            ),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn info(config: &Config) -> String {
    format!(
        "DeskShell system information:\n\
         User: {}\n\
         Root directory: {}\n\
         Current directory: {}\n\
         Version: {}\n\
         Date: {}",
        config.username,
        config.root_dir.display(),
        config.current_dir.display(),
        VERSION,
        Local::now().format(DATE_FORMAT)
    )
}

fn list(config: &Config) -> String {
    match filesystem::list_files(config) {
        Ok(files) if files.is_empty() => "Directory is empty".to_string(),
        Ok(files) => format!(
            "Contents of {}:\n{}",
            config.current_dir.display(),
            files.join("\n")
        ),
        Err(e) => format!("Error listing files: {}", e),
    }
}

fn text_command(config: &Config, action: &str, args: &[&str]) -> String {
    match action {
        "read" => {
            let Some(name) = args.first() else {
                return "Usage: txt read <name>".to_string();
            };
            match filesystem::read_text_file(config, name) {
                Ok(content) => format!("Contents of {}:\n{}", name, content),
                Err(e) => format!("Error reading file: {}", e),
            }
        }
        "write" => {
            let [name, words @ ..] = args else {
                return "Usage: txt write <name> <content>".to_string();
            };
            if words.is_empty() {
                return "Usage: txt write <name> <content>".to_string();
            }
            match filesystem::create_text_file(config, name, &words.join(" ")) {
                Ok(()) => format!("File {} created", name),
                Err(e) => format!("Error writing file: {}", e),
            }
        }
        "list" => match filesystem::list_files(config) {
            Ok(files) => {
                let text_files: Vec<String> =
                    files.into_iter().filter(|f| f.contains(".txt")).collect();
                if text_files.is_empty() {
                    "No text files found".to_string()
                } else {
                    format!("Text files:\n{}", text_files.join("\n"))
                }
            }
            Err(e) => format!("Error listing files: {}", e),
        },
        _ => format!("Unknown txt action: {}", action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> (tempfile::TempDir, Config, Console) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path());
        (dir, config, Console::new())
    }

    #[test]
    fn blank_line_is_empty_and_recorded() {
        let (_dir, mut config, mut console) = scratch();
        assert_eq!(console.execute(&mut config, "   "), "");
        assert_eq!(console.history(), ["   "]);
    }

    #[test]
    fn help_lists_every_builtin() {
        let (_dir, mut config, mut console) = scratch();
        let help = console.execute(&mut config, "help");
        for name in ["info", "cls", "txt", "cd", "ls", "mkdir", "rm", "cp", "echo", "date"] {
            assert!(help.contains(name), "help is missing {}", name);
        }
    }

    #[test]
    fn echo_collapses_whitespace() {
        let (_dir, mut config, mut console) = scratch();
        assert_eq!(console.execute(&mut config, "echo  hello   world "), "hello world");
    }

    #[test]
    fn unknown_command_names_itself() {
        let (_dir, mut config, mut console) = scratch();
        let out = console.execute(&mut config, "frobnicate now");
        assert!(out.starts_with("Unknown command: frobnicate."));
    }

    #[test]
    fn txt_write_then_read() {
        let (_dir, mut config, mut console) = scratch();
        assert_eq!(
            console.execute(&mut config, "txt write memo hello there"),
            "File memo created"
        );
        assert_eq!(
            console.execute(&mut config, "txt read memo"),
            "Contents of memo:\nhello there"
        );
        assert_eq!(
            console.execute(&mut config, "txt list"),
            "Text files:\nmemo.txt (file)"
        );
    }

    #[test]
    fn usage_messages_for_missing_arguments() {
        let (_dir, mut config, mut console) = scratch();
        assert_eq!(console.execute(&mut config, "mkdir"), "Usage: mkdir <name>");
        assert_eq!(console.execute(&mut config, "cp one"), "Usage: cp <source> <destination>");
        assert_eq!(
            console.execute(&mut config, "txt write memo"),
            "Usage: txt write <name> <content>"
        );
    }

    #[test]
    fn ls_on_empty_directory() {
        let (_dir, mut config, mut console) = scratch();
        assert_eq!(console.execute(&mut config, "ls"), "Directory is empty");
    }

    #[test]
    fn date_has_fixed_shape() {
        let (_dir, mut config, mut console) = scratch();
        let date = console.execute(&mut config, "date");
        assert_eq!(date.len(), "2006-01-02 15:04:05".len());
        assert_eq!(&date[4..5], "-");
    }
}
