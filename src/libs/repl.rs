//! The interactive read-eval-print loop.
//!
//! Thin boundary around the dispatcher: it shows the prompt, reads one line
//! at a time, prints the resulting messages, and stops on `quit`/`exit`,
//! end of input, or an interrupted read. All command logic stays in
//! [`crate::commands::dispatch`].

use crate::commands::{self, Outcome};
use crate::libs::messages::Message;
use crate::msg_print;
use crate::store::tasks::TaskStore;
use anyhow::Result;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter command (type 'help' for options): ";

pub struct Repl {
    store: TaskStore,
}

impl Repl {
    pub fn new() -> Self {
        Repl { store: TaskStore::new() }
    }

    /// Runs the session loop until a quit command or end of input.
    pub fn run(&mut self) -> Result<()> {
        msg_print!(Message::Greeting);
        msg_print!(Message::GreetingHint);

        let stdin = io::stdin();
        let mut input = stdin.lock();

        loop {
            print!("{}", PROMPT);
            io::stdout().flush()?;

            let mut line = String::new();
            match input.read_line(&mut line) {
                // End of input and an interrupted read both end the session
                // the same way an explicit quit would.
                Ok(0) => {
                    msg_print!(Message::Farewell);
                    break;
                }
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    msg_print!(Message::Farewell);
                    break;
                }
                Err(e) => return Err(e.into()),
            }

            let (messages, outcome) = commands::dispatch(&mut self.store, &line);
            for message in messages {
                msg_print!(message);
            }
            if outcome == Outcome::Quit {
                break;
            }
        }

        Ok(())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
