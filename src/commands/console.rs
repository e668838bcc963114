/// Console, calculator and file panel commands
/// Called from the frontend via: invoke("console_submit", { input: "help" })

use super::SharedContext;
use crate::models::ViewEvent;
use crate::shell::BufferedView;
use tauri::State;

/// Run one console line; returns the transcript updates to render
#[tauri::command]
pub fn console_submit(input: String, state: State<'_, SharedContext>) -> Vec<ViewEvent> {
    let mut view = BufferedView::new();
    state.lock().submit_console(&input, &mut view);
    view.take()
}

/// Evaluate one calculator expression
#[tauri::command]
pub fn calculate(expression: String, state: State<'_, SharedContext>) -> Vec<ViewEvent> {
    let mut view = BufferedView::new();
    state.lock().calculate(&expression, &mut view);
    view.take()
}

#[tauri::command]
pub fn get_file_list(state: State<'_, SharedContext>) -> Vec<String> {
    state.lock().file_listing()
}

#[tauri::command]
pub fn create_text_file(name: String, content: String, state: State<'_, SharedContext>) -> String {
    state.lock().create_text_file(&name, &content)
}

#[tauri::command]
pub fn read_text_file(name: String, state: State<'_, SharedContext>) -> String {
    state.lock().read_text_file(&name)
}
