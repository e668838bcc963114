/// Commands module
/// Tauri IPC handlers for the webview panels.
/// Commands act as the boundary between the frontend and the shell core;
/// each one locks the application context for the length of one request.

pub mod console;
pub mod settings;

use crate::bridge::FfiBridge;
use crate::shell::AppContext;
use parking_lot::Mutex;
use std::sync::Arc;

pub type SharedContext = Arc<Mutex<AppContext<FfiBridge>>>;
