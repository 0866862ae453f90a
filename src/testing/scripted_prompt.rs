use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use crate::domain::AppError;
use crate::ports::Prompt;

/// Prompt answering from a fixed script, recording every question asked.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<String>>,
    questions: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            questions: RefCell::new(Vec::new()),
        }
    }

    /// Questions asked so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, question: &str) -> Result<String, AppError> {
        self.questions.borrow_mut().push(question.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted").into())
    }
}
