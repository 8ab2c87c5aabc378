//! Console seam between the presentation layer and the terminal.
//!
//! The `Console` trait abstracts blocking line-oriented I/O so the view
//! can be driven by a real terminal in production and by a scripted
//! double in tests.

use crate::error::{ConsoleError, ConsoleResult};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Blocking, line-oriented console.
pub trait Console {
    /// Print `prompt` and block until one line of input is available.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` when input has ended (EOF or
    /// interrupt); there is no way to recover a prompt after that.
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String>;

    /// Write one line of output.
    fn write_line(&mut self, text: &str);
}

/// Console backed by a `rustyline` editor on the real terminal.
pub struct StdConsole {
    editor: DefaultEditor,
}

impl StdConsole {
    /// Create a console attached to the process terminal.
    pub fn new() -> ConsoleResult<Self> {
        let editor = DefaultEditor::new().map_err(ConsoleError::from)?;
        Ok(Self { editor })
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.editor.readline(prompt).map_err(ConsoleError::from)
    }

    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }
}

impl From<ReadlineError> for ConsoleError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Eof | ReadlineError::Interrupted => ConsoleError::Closed,
            ReadlineError::Io(io) => ConsoleError::Io(io),
            other => ConsoleError::Terminal(other.to_string()),
        }
    }
}

#[cfg(test)]
pub mod scripted {
    //! Scripted console double for unit tests.

    use super::Console;
    use crate::error::{ConsoleError, ConsoleResult};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Console that replays scripted input lines and records all output.
    ///
    /// State is shared behind `Arc<Mutex<_>>` so a test can keep a clone
    /// and inspect the transcript after the console has been moved into
    /// the view.
    #[derive(Clone, Default)]
    pub struct ScriptedConsole {
        inputs: Arc<Mutex<VecDeque<String>>>,
        output: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedConsole {
        pub fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: Arc::new(Mutex::new(
                    inputs.iter().map(|s| s.to_string()).collect(),
                )),
                output: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Everything written so far, prompts included, joined by newlines.
        pub fn transcript(&self) -> String {
            self.output.lock().unwrap().join("\n")
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
}
