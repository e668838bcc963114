/// Models module
/// Data types shared between the UI-side core and the desktop host.
/// Types sent to the webview are serializable.

use crate::bridge::OwnedValue;
use serde::{Deserialize, Serialize};

/// One line of console input, already trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    raw_text: String,
}

impl Command {
    /// `None` when the input is blank after trimming
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        (!trimmed.is_empty()).then(|| Self {
            raw_text: trimmed.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.raw_text
    }
}

/// What a dispatched command produced
#[derive(Debug)]
pub enum CommandResult {
    /// Console cleared, nothing appended
    Cleared,
    /// One result line, still owned until appended
    Text(OwnedValue),
}

/// How the dispatcher handled one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Ignored,
    Cleared,
    Appended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub input: String,
    pub output: String,
}

impl TranscriptEntry {
    pub fn echo(&self) -> String {
        format!(">> {}", self.input)
    }
}

/// Append-only console log, emptied only by `cls`
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: &str, output: &str) {
        self.entries.push(TranscriptEntry {
            input: input.to_string(),
            output: output.to_string(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered lines: the echo of each input followed by its result
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|e| [e.echo(), e.output.clone()])
            .collect()
    }
}

/// Result of the wallpaper picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Chosen(String),
    Cancelled,
}

/// One update for the rendering side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewEvent {
    TranscriptLine { text: String },
    TranscriptCleared,
    CalculatorLine { text: String },
    CalculatorCleared,
    Wallpaper { path: String },
}
