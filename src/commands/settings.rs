/// Settings panel commands
/// Username, working directory and wallpaper, all read fresh from the backend

use super::SharedContext;
use crate::models::{PickOutcome, ViewEvent};
use crate::shell::session::window_title;
use crate::shell::{BufferedView, WallpaperPicker};
use tauri::{AppHandle, State, Window};
use tauri_plugin_dialog::DialogExt;

/// Native file dialog restricted to wallpaper images
struct DialogPicker {
    app: AppHandle,
}

impl WallpaperPicker for DialogPicker {
    fn pick(&self) -> PickOutcome {
        let chosen = self
            .app
            .dialog()
            .file()
            .set_title("Choose a wallpaper image")
            .add_filter("Images", &["jpg", "jpeg", "png"])
            .blocking_pick_file();

        match chosen.map(|file| file.into_path()) {
            Some(Ok(path)) => PickOutcome::Chosen(path.to_string_lossy().into_owned()),
            Some(Err(e)) => {
                log::warn!("[Settings] Unusable wallpaper selection: {}", e);
                PickOutcome::Cancelled
            }
            None => PickOutcome::Cancelled,
        }
    }
}

#[tauri::command]
pub fn get_username(state: State<'_, SharedContext>) -> String {
    state.lock().session().username()
}

/// Store a new username and retitle the window
#[tauri::command]
pub fn set_username(name: String, window: Window, state: State<'_, SharedContext>) -> Result<String, String> {
    let mut ctx = state.lock();
    let mut session = ctx.session();
    if session.set_username(&name) {
        let title = window_title(&session.username());
        window.set_title(&title).map_err(|e| e.to_string())?;
        log::info!("[Settings] Username changed, window title is now {}", title);
    }
    Ok(session.username())
}

#[tauri::command]
pub fn get_current_directory(state: State<'_, SharedContext>) -> String {
    state.lock().session().current_directory()
}

#[tauri::command]
pub fn get_wallpaper_path(state: State<'_, SharedContext>) -> Option<String> {
    state.lock().session().wallpaper_path()
}

/// Re-render the configured wallpaper, if any
#[tauri::command]
pub fn refresh_wallpaper(state: State<'_, SharedContext>) -> Vec<ViewEvent> {
    let mut view = BufferedView::new();
    state.lock().session().refresh_wallpaper(&mut view);
    view.take()
}

/// Open the image chooser and apply the selection.
/// The dialog blocks a worker thread; the context stays unlocked until it closes.
/// Returns the view updates to render, empty when the chooser was cancelled.
#[tauri::command]
pub async fn choose_wallpaper(
    app: AppHandle,
    state: State<'_, SharedContext>,
) -> Result<Vec<ViewEvent>, String> {
    let picker = DialogPicker { app };
    let outcome = tauri::async_runtime::spawn_blocking(move || picker.pick())
        .await
        .map_err(|e| e.to_string())?;

    let mut view = BufferedView::new();
    state.lock().session().apply_wallpaper(outcome, &mut view);
    Ok(view.take())
}
