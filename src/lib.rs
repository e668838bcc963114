/// DeskShell
/// Desktop shell whose panels are rendered by a native UI runtime while the
/// session state lives in a backend reached only through a C ABI.
///
/// Module structure:
/// - bridge: the C ABI, `OwnedValue` and the UI-side `FfiBridge`
/// - services: backend runtime (config store, filesystem, console interpreter)
/// - shell: UI-side core (dispatcher, evaluator, session accessors)
/// - models: shared data types
/// - commands: Tauri IPC handlers (feature `desktop`)

pub mod bridge;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
mod desktop {
    use crate::bridge::FfiBridge;
    use crate::commands;
    use crate::shell::session::window_title;
    use crate::shell::AppContext;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tauri::{Manager, RunEvent};

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        let bridge = FfiBridge::open(None).expect("failed to initialize the shell backend");
        let context: commands::SharedContext = Arc::new(Mutex::new(AppContext::new(bridge)));

        tauri::Builder::default()
            .plugin(tauri_plugin_dialog::init())
            .manage(context.clone())
            .setup(move |app| {
                if cfg!(debug_assertions) {
                    app.handle().plugin(
                        tauri_plugin_log::Builder::default()
                            .level(log::LevelFilter::Info)
                            .build(),
                    )?;
                }

                let username = context.lock().session().username();
                if let Some(window) = app.get_webview_window("main") {
                    window.set_title(&window_title(&username))?;
                }
                Ok(())
            })
            .invoke_handler(tauri::generate_handler![
                commands::console::console_submit,
                commands::console::calculate,
                commands::console::get_file_list,
                commands::console::create_text_file,
                commands::console::read_text_file,
                commands::settings::get_username,
                commands::settings::set_username,
                commands::settings::get_current_directory,
                commands::settings::get_wallpaper_path,
                commands::settings::refresh_wallpaper,
                commands::settings::choose_wallpaper,
            ])
            .build(tauri::generate_context!())
            .expect("error while building tauri application")
            .run(|_app_handle, event| {
                if let RunEvent::Exit = event {
                    log::info!("App shutting down");
                }
            });
    }
}
