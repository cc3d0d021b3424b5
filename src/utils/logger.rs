use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }

    pub fn log_message(&self, level: LogLevel, message: &str) {
        let line = self.format_line(level, message);
        match level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }

    pub fn log_message_with_trace(&self, level: LogLevel, message: &str, trace: Vec<&str>) {
        self.log_message(level, message);
        for t in trace {
            println!("     ↳ {}", t);
        }
    }

    /// Builds a log line without printing it, for output that must go through
    /// another writer (e.g. above a progress spinner).
    pub fn format_line(&self, level: LogLevel, message: &str) -> String {
        format!(
            "📦 {} {} {}",
            self.tool_signature(),
            self.format_status(level),
            message
        )
    }

    fn tool_signature(&self) -> String {
        format!(
            "{}[{}{}modpack{}{}]{}",
            SetForegroundColor(Color::Grey),
            SetForegroundColor(Color::Rgb {
                r: 29,
                g: 211,
                b: 176,
            }),
            SetAttribute(Attribute::Bold),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Grey),
            ResetColor
        )
    }

    fn format_status(&self, level: LogLevel) -> String {
        let color = match level {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
        };

        let status = match level {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
        };

        format!(
            "[{}{}{}{}]{}",
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
            status,
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }
}
