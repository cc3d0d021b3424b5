use crate::utils::logger::{LogLevel, Logger};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::time::Duration;

pub struct Spinner {
    bar: ProgressBar,
    active: Cell<bool>,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        bar.set_style(style);
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));

        Spinner {
            bar,
            active: Cell::new(true),
        }
    }

    /// Prints a log line above the spinner. Falls back to plain stdout when
    /// the spinner is hidden (no terminal), so notices are never swallowed.
    pub fn log(&self, level: LogLevel, message: &str) {
        let logger = Logger::new();
        if self.bar.is_hidden() {
            logger.log_message(level, message);
        } else {
            self.bar.println(logger.format_line(level, message));
        }
    }

    pub fn succeed(&self, message: impl Into<String>) {
        if self.active.get() {
            self.bar.finish_and_clear();
            Logger::new().log_message(LogLevel::Success, &message.into());
            self.active.set(false);
        }
    }

    /// Clears the spinner without a closing line; the caller reports the error.
    pub fn clear(&self) {
        if self.active.get() {
            self.bar.finish_and_clear();
            self.active.set(false);
        }
    }

    #[cfg(test)]
    fn hidden(message: &str) -> Self {
        let spinner = Spinner::new(message);
        spinner
            .bar
            .set_draw_target(indicatif::ProgressDrawTarget::hidden());
        spinner
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if self.active.get() {
            self.bar.abandon();
            self.active.set(false);
        }
    }
}

pub fn with_spinner(message: &str) -> Spinner {
    Spinner::new(message)
}

/// Runs `action` under a spinner and logs `on_success` if it succeeds.
/// On failure the spinner is cleared and the error handed back untouched.
pub fn run_step<T, E, F, S>(spinner: Spinner, on_success: S, action: F) -> Result<T, E>
where
    F: FnOnce(&Spinner) -> Result<T, E>,
    S: FnOnce(&T) -> String,
{
    match action(&spinner) {
        Ok(value) => {
            spinner.succeed(on_success(&value));
            Ok(value)
        }
        Err(err) => {
            spinner.clear();
            Err(err)
        }
    }
}
