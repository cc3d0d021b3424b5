use crate::utils::semver::BumpKind;
use std::fmt;

/// One of the four options offered by the version prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpChoice {
    Patch,
    Minor,
    Major,
    /// Keep the current version.
    #[value(name = "none")]
    Keep,
}

impl BumpChoice {
    /// Maps the console answers `1`..`4` to a choice.
    pub fn from_answer(answer: &str) -> Option<BumpChoice> {
        match answer.trim() {
            "1" => Some(BumpChoice::Patch),
            "2" => Some(BumpChoice::Minor),
            "3" => Some(BumpChoice::Major),
            "4" => Some(BumpChoice::Keep),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<BumpKind> {
        match self {
            BumpChoice::Patch => Some(BumpKind::Patch),
            BumpChoice::Minor => Some(BumpKind::Minor),
            BumpChoice::Major => Some(BumpKind::Major),
            BumpChoice::Keep => None,
        }
    }
}

impl fmt::Display for BumpChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{}", kind),
            None => f.write_str("none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_map_to_choices() {
        assert_eq!(BumpChoice::from_answer("1"), Some(BumpChoice::Patch));
        assert_eq!(BumpChoice::from_answer(" 2 "), Some(BumpChoice::Minor));
        assert_eq!(BumpChoice::from_answer("3\n"), Some(BumpChoice::Major));
        assert_eq!(BumpChoice::from_answer("4"), Some(BumpChoice::Keep));
    }

    #[test]
    fn unknown_answers_are_rejected() {
        for answer in ["", "0", "5", "9", "abc", "patch", "1.0"] {
            assert_eq!(BumpChoice::from_answer(answer), None, "{answer}");
        }
    }
}
