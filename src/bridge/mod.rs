/// Bridge module
/// The boundary between the UI runtime and the backend runtime.
///
/// - ffi: the backend's exported C ABI
/// - value: `OwnedValue`, the move-only guard for every returned text
/// - client: `FfiBridge`, the UI-side caller of the C ABI

pub mod client;
pub mod ffi;
pub mod value;

pub use client::FfiBridge;
pub use value::OwnedValue;

/// Every operation the UI side may request from the backend.
///
/// Text results come back as `OwnedValue`s the caller now owns; inputs are
/// borrowed and never retained by the backend.
pub trait Bridge {
    fn get_username(&mut self) -> OwnedValue;
    fn set_username(&mut self, name: &str);
    fn get_current_directory(&mut self) -> OwnedValue;
    fn execute_console_command(&mut self, command: &str) -> OwnedValue;
    fn get_file_list(&mut self) -> OwnedValue;
    fn change_wallpaper(&mut self, path: &str);
    fn get_wallpaper_path(&mut self) -> OwnedValue;
    fn create_text_file(&mut self, name: &str, content: &str) -> OwnedValue;
    fn read_text_file(&mut self, name: &str) -> OwnedValue;
}
