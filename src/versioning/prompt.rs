use crate::error::ModpackError;
use crate::types::choice::BumpChoice;
use crate::utils::logger::{LogLevel, Logger};
use std::io::{BufRead, Write};

pub const CHOICE_QUESTION: &str = "Select an option (1-4):";

/// Source of answers for the version bump menu.
///
/// The selection loop in `manage` owns the policy (which answers are valid,
/// when to ask again); implementations only move text in and out.
pub trait ChoicePrompter {
    /// Presents the rendered menu of candidate versions.
    fn show(&mut self, menu: &str) -> Result<(), ModpackError>;

    /// Reads one raw answer. Fails with `ModpackError::Input` when no more
    /// answers can be produced.
    fn read_answer(&mut self) -> Result<String, ModpackError>;

    /// Tells the user an answer was not one of the recognised options.
    fn reject(&mut self, answer: &str) -> Result<(), ModpackError>;
}

fn rejection_message(answer: &str) -> String {
    format!("Invalid choice '{}'. Enter 1, 2, 3 or 4.", answer.trim())
}

/// Terminal prompt backed by `inquire`.
pub struct InquirePrompter;

impl ChoicePrompter for InquirePrompter {
    fn show(&mut self, menu: &str) -> Result<(), ModpackError> {
        println!();
        println!("{}", menu);
        Ok(())
    }

    fn read_answer(&mut self) -> Result<String, ModpackError> {
        inquire::Text::new(CHOICE_QUESTION)
            .with_help_message("1 = patch, 2 = minor, 3 = major, 4 = keep current version")
            .prompt()
            .map_err(|e| {
                ModpackError::Input(format!("Failed to prompt for version bump: {}", e))
            })
    }

    fn reject(&mut self, answer: &str) -> Result<(), ModpackError> {
        Logger::new().log_message(LogLevel::Warning, &rejection_message(answer));
        Ok(())
    }
}

/// Line-oriented prompt over any reader and writer (piped stdin, scripted input).
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompter { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> ChoicePrompter for LinePrompter<R, W> {
    fn show(&mut self, menu: &str) -> Result<(), ModpackError> {
        writeln!(self.output, "{}", menu)
            .map_err(|e| ModpackError::io("Failed to write prompt", e))
    }

    fn read_answer(&mut self) -> Result<String, ModpackError> {
        write!(self.output, "{} ", CHOICE_QUESTION)
            .and_then(|_| self.output.flush())
            .map_err(|e| ModpackError::io("Failed to write prompt", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ModpackError::io("Failed to read version choice", e))?;
        if read == 0 {
            return Err(ModpackError::Input(
                "No version choice was made (input closed)".to_string(),
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn reject(&mut self, answer: &str) -> Result<(), ModpackError> {
        writeln!(self.output, "{}", rejection_message(answer))
            .map_err(|e| ModpackError::io("Failed to write prompt", e))
    }
}

/// Non-interactive prompt that always answers with a preselected choice.
pub struct FixedPrompter {
    choice: BumpChoice,
}

impl FixedPrompter {
    pub fn new(choice: BumpChoice) -> Self {
        FixedPrompter { choice }
    }
}

impl ChoicePrompter for FixedPrompter {
    fn show(&mut self, _menu: &str) -> Result<(), ModpackError> {
        Ok(())
    }

    fn read_answer(&mut self) -> Result<String, ModpackError> {
        let answer = match self.choice {
            BumpChoice::Patch => "1",
            BumpChoice::Minor => "2",
            BumpChoice::Major => "3",
            BumpChoice::Keep => "4",
        };
        Ok(answer.to_string())
    }

    fn reject(&mut self, answer: &str) -> Result<(), ModpackError> {
        Err(ModpackError::Input(rejection_message(answer)))
    }
}
