/// In-memory bridge for unit tests.
/// Records every call and produces values the same way the backend does.

use crate::bridge::{Bridge, OwnedValue};

type Answer = Box<dyn FnMut(&str) -> OwnedValue>;

pub struct ScriptedBridge {
    calls: Vec<String>,
    answer: Answer,
    pub username: Option<String>,
    pub wallpaper: Option<String>,
    pub directory: String,
    pub files: String,
}

impl ScriptedBridge {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            answer: Box::new(|cmd| OwnedValue::from_text(&format!("ran {}", cmd))),
            username: Some("User".to_string()),
            wallpaper: None,
            directory: "/home/user/DeskShell".to_string(),
            files: String::new(),
        }
    }

    /// Replace the console interpreter's answer
    pub fn answering(mut self, answer: impl FnMut(&str) -> OwnedValue + 'static) -> Self {
        self.answer = Box::new(answer);
        self
    }

    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    fn optional(text: &Option<String>) -> OwnedValue {
        text.as_deref().map_or_else(OwnedValue::absent, OwnedValue::from_text)
    }
}

impl Bridge for ScriptedBridge {
    fn get_username(&mut self) -> OwnedValue {
        self.calls.push("get_username".into());
        Self::optional(&self.username)
    }

    fn set_username(&mut self, name: &str) {
        self.calls.push(format!("set_username({})", name));
        self.username = Some(name.to_string());
    }

    fn get_current_directory(&mut self) -> OwnedValue {
        self.calls.push("get_current_directory".into());
        OwnedValue::from_text(&self.directory)
    }

    fn execute_console_command(&mut self, command: &str) -> OwnedValue {
        self.calls.push(format!("execute_console_command({})", command));
        (self.answer)(command)
    }

    fn get_file_list(&mut self) -> OwnedValue {
        self.calls.push("get_file_list".into());
        OwnedValue::from_text(&self.files)
    }

    fn change_wallpaper(&mut self, path: &str) {
        self.calls.push(format!("change_wallpaper({})", path));
        self.wallpaper = Some(path.to_string());
    }

    fn get_wallpaper_path(&mut self) -> OwnedValue {
        self.calls.push("get_wallpaper_path".into());
        Self::optional(&self.wallpaper)
    }

    fn create_text_file(&mut self, name: &str, _content: &str) -> OwnedValue {
        self.calls.push(format!("create_text_file({})", name));
        OwnedValue::from_text("File created")
    }

    fn read_text_file(&mut self, name: &str) -> OwnedValue {
        self.calls.push(format!("read_text_file({})", name));
        OwnedValue::from_text("")
    }
}
