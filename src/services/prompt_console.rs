use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

use crate::domain::AppError;
use crate::ports::Prompt;

/// Operator prompt on the controlling terminal.
///
/// Falls back to a plain line read when stdin or stdout is piped, so the
/// tool stays scriptable (`echo y | simple-ui add button`).
#[derive(Debug, Default, Clone)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for ConsolePrompt {
    fn ask(&self, question: &str) -> Result<String, AppError> {
        if io::stdin().is_terminal() && io::stdout().is_terminal() {
            let answer = Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| AppError::Io(io::Error::other(e)))?;
            Ok(answer)
        } else {
            // Non-interactive: read the answer from stdin.
            print!("{question} ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().lock().read_line(&mut input)?;
            Ok(input.trim().to_string())
        }
    }
}
