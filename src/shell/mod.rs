/// Shell module
/// UI-side core: everything a panel does between a user event and a
/// rendered line. Talks to the backend only through `bridge::Bridge`.

pub mod context;
pub mod dispatcher;
pub mod evaluator;
pub mod files;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use context::AppContext;
pub use dispatcher::Dispatcher;
pub use session::{SessionAccessors, WallpaperPicker};
pub use view::{BufferedView, ViewSink};
