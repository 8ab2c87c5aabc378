use insured_registry::console::Console;
use insured_registry::error::{ConsoleError, ConsoleResult};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted console for testing.
///
/// Replays a fixed sequence of input lines and records every prompt and
/// output line. State is shared behind `Arc<Mutex<_>>` so a test can
/// keep a clone and inspect the transcript after the console has been
/// moved into the view.
#[derive(Clone, Default)]
pub struct ScriptedConsole {
    inputs: Arc<Mutex<VecDeque<String>>>,
    output: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl ScriptedConsole {
    /// Create a console that will answer prompts with `inputs` in order.
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: Arc::new(Mutex::new(inputs.iter().map(|s| s.to_string()).collect())),
            output: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything written so far, prompts included, joined by newlines.
    pub fn transcript(&self) -> String {
        self.output.lock().unwrap().join("\n")
    }

    /// All recorded lines, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.output.lock().unwrap().clone()
    }

    /// Number of scripted inputs not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.output.lock().unwrap().push(prompt.to_string());
        self.inputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ConsoleError::Closed)
    }

    fn write_line(&mut self, text: &str) {
        self.output.lock().unwrap().push(text.to_string());
    }
}
