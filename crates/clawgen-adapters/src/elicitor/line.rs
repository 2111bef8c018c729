//! Line-by-line terminal prompts.
//!
//! Every answer is one line of input fed through the question's policy;
//! rejected answers print the hint and ask again. End of input is fatal.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use clawgen_core::{
    application::{ApplicationError, ports::Elicitor},
    domain::{ChoiceQuestion, ConfirmQuestion, TextQuestion},
    error::{ClawgenError, ClawgenResult},
};

pub struct LineElicitor<R, W> {
    reader: R,
    writer: W,
}

impl LineElicitor<StdinLock<'static>, Stdout> {
    /// Prompts on stdout, answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineElicitor<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Show `label`, read one line. `question` names the prompt in errors.
    fn prompt(&mut self, question: &str, label: &str) -> ClawgenResult<String> {
        write!(self.writer, "{label}").map_err(prompt_failed)?;
        self.writer.flush().map_err(prompt_failed)?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(prompt_failed)?;
        if read == 0 {
            return Err(ApplicationError::InputExhausted {
                prompt: question.to_string(),
            }
            .into());
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn reject(&mut self, hint: &str) -> ClawgenResult<()> {
        writeln!(self.writer, "  {hint}").map_err(prompt_failed)
    }
}

fn prompt_failed(e: io::Error) -> ClawgenError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

impl<R: BufRead, W: Write> Elicitor for LineElicitor<R, W> {
    fn text(&mut self, question: &TextQuestion) -> ClawgenResult<String> {
        let label = match question.default.as_deref() {
            Some(d) if !d.is_empty() => format!("? {} [{d}]: ", question.prompt),
            _ => format!("? {}: ", question.prompt),
        };
        loop {
            let line = self.prompt(&question.prompt, &label)?;
            match question.accept(&line) {
                Ok(value) => return Ok(value),
                Err(hint) => self.reject(&hint)?,
            }
        }
    }

    fn confirm(&mut self, question: &ConfirmQuestion) -> ClawgenResult<bool> {
        let label = format!("? {} {}: ", question.prompt, question.hint());
        loop {
            let line = self.prompt(&question.prompt, &label)?;
            match question.accept(&line) {
                Ok(value) => return Ok(value),
                Err(hint) => self.reject(&hint)?,
            }
        }
    }

    fn choice(&mut self, question: &ChoiceQuestion) -> ClawgenResult<usize> {
        writeln!(self.writer, "? {}", question.prompt).map_err(prompt_failed)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(self.writer, "  {}) {option}", i + 1).map_err(prompt_failed)?;
        }
        let label = match question.default_label() {
            Some(d) => format!("  Select [{d}]: "),
            None => "  Select: ".to_string(),
        };
        loop {
            let line = self.prompt(&question.prompt, &label)?;
            match question.accept(&line) {
                Ok(index) => return Ok(index),
                Err(hint) => self.reject(&hint)?,
            }
        }
    }

    fn note(&mut self, message: &str) -> ClawgenResult<()> {
        writeln!(self.writer, "\n{message}").map_err(prompt_failed)
    }
}
