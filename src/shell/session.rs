/// Session context accessors
/// Read and write the backend-owned session fields. Every getter makes a
/// bridge call and copies the fresh snapshot out before the value is
/// released; nothing is cached on this side.

use super::view::ViewSink;
use crate::bridge::Bridge;
use crate::models::PickOutcome;

pub const WINDOW_TITLE: &str = "DeskShell";

const WALLPAPER_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

/// Blocking image chooser; returns once the dialog is closed
pub trait WallpaperPicker {
    fn pick(&self) -> PickOutcome;
}

pub fn window_title(username: &str) -> String {
    if username.is_empty() {
        WINDOW_TITLE.to_string()
    } else {
        format!("{} - {}", WINDOW_TITLE, username)
    }
}

pub struct SessionAccessors<'a, B: Bridge + ?Sized> {
    bridge: &'a mut B,
}

impl<'a, B: Bridge + ?Sized> SessionAccessors<'a, B> {
    pub fn new(bridge: &'a mut B) -> Self {
        Self { bridge }
    }

    /// Current username, blank when the backend has none
    pub fn username(&mut self) -> String {
        self.bridge.get_username().to_text().into_owned()
    }

    /// Store a new username. Empty input is ignored; returns whether it applied.
    pub fn set_username(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.bridge.set_username(name);
        true
    }

    pub fn current_directory(&mut self) -> String {
        self.bridge.get_current_directory().to_text().into_owned()
    }

    pub fn wallpaper_path(&mut self) -> Option<String> {
        self.bridge.get_wallpaper_path().into_string()
    }

    /// Ask the view to show the configured wallpaper, if it is a usable image path
    pub fn refresh_wallpaper<V: ViewSink + ?Sized>(&mut self, view: &mut V) -> Option<String> {
        let path = self.wallpaper_path().filter(|p| is_image_path(p))?;
        view.show_wallpaper(&path);
        Some(path)
    }

    /// Apply a picker result: a chosen path is stored and shown
    pub fn apply_wallpaper<V: ViewSink + ?Sized>(
        &mut self,
        outcome: PickOutcome,
        view: &mut V,
    ) -> Option<String> {
        match outcome {
            PickOutcome::Chosen(path) => {
                log::info!("Wallpaper changed to {}", path);
                self.bridge.change_wallpaper(&path);
                self.refresh_wallpaper(view)
            }
            PickOutcome::Cancelled => None,
        }
    }

    pub fn choose_wallpaper<P, V>(&mut self, picker: &P, view: &mut V) -> Option<String>
    where
        P: WallpaperPicker + ?Sized,
        V: ViewSink + ?Sized,
    {
        let outcome = picker.pick();
        self.apply_wallpaper(outcome, view)
    }
}

fn is_image_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    WALLPAPER_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
