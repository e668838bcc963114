/// Rendering sinks
/// The core never draws anything; it tells a sink what changed.

use crate::models::ViewEvent;

pub trait ViewSink {
    fn append_transcript(&mut self, line: &str);
    fn clear_transcript(&mut self);
    fn append_calculator(&mut self, line: &str);
    fn clear_calculator(&mut self);
    /// Ask the renderer to load and scale the wallpaper at `path`
    fn show_wallpaper(&mut self, path: &str);
}

/// Collects updates in order so a host can forward them in one batch
#[derive(Debug, Default)]
pub struct BufferedView {
    events: Vec<ViewEvent>,
}

impl BufferedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }
}

impl ViewSink for BufferedView {
    fn append_transcript(&mut self, line: &str) {
        self.events.push(ViewEvent::TranscriptLine {
            text: line.to_string(),
        });
    }

    fn clear_transcript(&mut self) {
        self.events.push(ViewEvent::TranscriptCleared);
    }

    fn append_calculator(&mut self, line: &str) {
        self.events.push(ViewEvent::CalculatorLine {
            text: line.to_string(),
        });
    }

    fn clear_calculator(&mut self) {
        self.events.push(ViewEvent::CalculatorCleared);
    }

    fn show_wallpaper(&mut self, path: &str) {
        self.events.push(ViewEvent::Wallpaper {
            path: path.to_string(),
        });
    }
}
