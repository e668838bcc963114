/// Services module
/// Backend runtime: config store, filesystem helper and console interpreter.
/// Reached from the UI side only through `bridge`.

pub mod backend;
pub mod config;
pub mod console;
pub mod filesystem;

pub use backend::Backend;
pub use config::Config;
pub use console::Console;
