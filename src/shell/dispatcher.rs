/// Console dispatcher
/// Routes one input line either to the local `cls` built-in or across the
/// bridge to the backend interpreter, and keeps the transcript.

use super::view::ViewSink;
use crate::bridge::Bridge;
use crate::models::{Command, CommandResult, DispatchOutcome, Transcript};

/// The only command handled without a bridge call
pub const CLEAR_COMMAND: &str = "cls";

#[derive(Debug, Default)]
pub struct Dispatcher {
    transcript: Transcript,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Handle one raw input line
    pub fn dispatch<B, V>(&mut self, bridge: &mut B, view: &mut V, input: &str) -> DispatchOutcome
    where
        B: Bridge + ?Sized,
        V: ViewSink + ?Sized,
    {
        let Some(command) = Command::parse(input) else {
            return DispatchOutcome::Ignored;
        };

        if command.text() != CLEAR_COMMAND {
            view.append_transcript(&format!(">> {}", command.text()));
        }

        match Self::route(bridge, &command) {
            CommandResult::Cleared => {
                self.transcript.clear();
                view.clear_transcript();
                DispatchOutcome::Cleared
            }
            CommandResult::Text(value) => {
                let output = value.to_text();
                view.append_transcript(&output);
                self.transcript.push(command.text(), &output);
                DispatchOutcome::Appended
            }
        }
    }

    fn route<B: Bridge + ?Sized>(bridge: &mut B, command: &Command) -> CommandResult {
        if command.text() == CLEAR_COMMAND {
            return CommandResult::Cleared;
        }
        log::debug!("[Dispatcher] -> backend: {}", command.text());
        CommandResult::Text(bridge.execute_console_command(command.text()))
    }
}
