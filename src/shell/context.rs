/// Application context
/// Built once at startup; owns the bridge, the console transcript and the
/// calculator log. Panels reach everything through it.

use super::dispatcher::Dispatcher;
use super::evaluator;
use super::files;
use super::session::SessionAccessors;
use super::view::ViewSink;
use crate::bridge::Bridge;
use crate::models::{DispatchOutcome, Transcript};

pub struct AppContext<B: Bridge> {
    bridge: B,
    dispatcher: Dispatcher,
    calculator_log: Vec<String>,
}

impl<B: Bridge> AppContext<B> {
    pub fn new(bridge: B) -> Self {
        Self {
            bridge,
            dispatcher: Dispatcher::new(),
            calculator_log: Vec::new(),
        }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn transcript(&self) -> &Transcript {
        self.dispatcher.transcript()
    }

    pub fn calculator_log(&self) -> &[String] {
        &self.calculator_log
    }

    /// Console panel: one submitted input line
    pub fn submit_console<V: ViewSink + ?Sized>(&mut self, input: &str, view: &mut V) -> DispatchOutcome {
        self.dispatcher.dispatch(&mut self.bridge, view, input)
    }

    /// Calculator panel: a result is appended to the log; an error replaces
    /// the whole log with its message
    pub fn calculate<V: ViewSink + ?Sized>(&mut self, expression: &str, view: &mut V) -> String {
        let line = match evaluator::evaluate_line(expression) {
            Ok(line) => line,
            Err(e) => {
                self.calculator_log.clear();
                view.clear_calculator();
                e.to_string()
            }
        };
        view.append_calculator(&line);
        self.calculator_log.push(line.clone());
        line
    }

    pub fn session(&mut self) -> SessionAccessors<'_, B> {
        SessionAccessors::new(&mut self.bridge)
    }

    pub fn file_listing(&mut self) -> Vec<String> {
        files::file_listing(&mut self.bridge)
    }

    pub fn create_text_file(&mut self, name: &str, content: &str) -> String {
        files::create_text_file(&mut self.bridge, name, content)
    }

    pub fn read_text_file(&mut self, name: &str) -> String {
        files::read_text_file(&mut self.bridge, name)
    }
}
