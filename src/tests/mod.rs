mod registry_tests;
mod session_tests;
mod config_tests;

use std::collections::VecDeque;

use log::info;

use crate::errors::{ KanbanError, KanbanResult };
use crate::traits::prompter::{ MessageKind, Prompter };

// Initialize logging once; later calls are no-ops
pub(crate) fn setup() {
    if env_logger::builder().is_test(true).try_init().is_ok() {
        info!("Logger initialized");
    }
}

/// One scripted answer
#[derive(Debug, Clone)]
pub(crate) enum Answer {
    Text(&'static str),
    Choice(usize),
    Yes,
    No,
}

/// Prompter that replays canned answers and records everything shown
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub shown: Vec<(MessageKind, String)>,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn saw(&self, kind: MessageKind, needle: &str) -> bool {
        self.shown.iter().any(|(k, m)| *k == kind && m.contains(needle))
    }

    fn next(&mut self, prompt: &str) -> KanbanResult<Answer> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| KanbanError::InputError(format!("script exhausted at {:?}", prompt)))
    }

    fn text(&mut self, prompt: &str) -> KanbanResult<String> {
        match self.next(prompt)? {
            Answer::Text(s) => Ok(s.to_string()),
            other => Err(KanbanError::InputError(format!("expected text for {:?}, got {:?}", prompt, other))),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> KanbanResult<String> {
        self.text(prompt)
    }

    fn password(&mut self, prompt: &str) -> KanbanResult<String> {
        self.text(prompt)
    }

    fn select(&mut self, prompt: &str, _items: &[&str]) -> KanbanResult<usize> {
        match self.next(prompt)? {
            Answer::Choice(i) => Ok(i),
            other => Err(KanbanError::InputError(format!("expected choice for {:?}, got {:?}", prompt, other))),
        }
    }

    fn confirm(&mut self, prompt: &str) -> KanbanResult<bool> {
        match self.next(prompt)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            other => Err(KanbanError::InputError(format!("expected yes/no for {:?}, got {:?}", prompt, other))),
        }
    }

    fn show(&mut self, kind: MessageKind, message: &str) {
        self.shown.push((kind, message.to_string()));
    }
}
