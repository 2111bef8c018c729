//! Replays a fixed list of answers. For tests and non-interactive runs.

use std::collections::VecDeque;

use clawgen_core::{
    application::{ApplicationError, ports::Elicitor},
    domain::{ChoiceQuestion, ConfirmQuestion, TextQuestion},
    error::ClawgenResult,
};

/// Answers are raw input lines, applied through the same policies as the
/// terminal: a rejected line is dropped and the next one is tried.
#[derive(Debug, Clone, Default)]
pub struct ScriptedElicitor {
    answers: VecDeque<String>,
    asked: Vec<String>,
    notes: Vec<String>,
}

impl ScriptedElicitor {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts seen so far, one entry per line consumed.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_line(&mut self, prompt: &str) -> ClawgenResult<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            ApplicationError::InputExhausted {
                prompt: prompt.to_string(),
            }
            .into()
        })
    }

    fn answer<T>(
        &mut self,
        prompt: &str,
        accept: impl Fn(&str) -> Result<T, String>,
    ) -> ClawgenResult<T> {
        loop {
            let line = self.next_line(prompt)?;
            if let Ok(value) = accept(&line) {
                return Ok(value);
            }
        }
    }
}

impl Elicitor for ScriptedElicitor {
    fn text(&mut self, question: &TextQuestion) -> ClawgenResult<String> {
        self.answer(&question.prompt, |line| question.accept(line))
    }

    fn confirm(&mut self, question: &ConfirmQuestion) -> ClawgenResult<bool> {
        self.answer(&question.prompt, |line| question.accept(line))
    }

    fn choice(&mut self, question: &ChoiceQuestion) -> ClawgenResult<usize> {
        self.answer(&question.prompt, |line| question.accept(line))
    }

    fn note(&mut self, message: &str) -> ClawgenResult<()> {
        self.notes.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawgen_core::error::ClawgenError;

    #[test]
    fn rejected_lines_are_skipped() {
        let mut e = ScriptedElicitor::new(["x", "2"]);
        let q = ChoiceQuestion::new("Pick", ["a", "b"]);
        assert_eq!(e.choice(&q).unwrap(), 1);
        assert_eq!(e.asked(), ["Pick", "Pick"]);
    }

    #[test]
    fn running_out_of_answers_is_an_error() {
        let mut e = ScriptedElicitor::new(Vec::<String>::new());
        let err = e.confirm(&ConfirmQuestion::new("Sure?")).unwrap_err();
        assert!(matches!(
            err,
            ClawgenError::Application(ApplicationError::InputExhausted { .. })
        ));
    }
}
