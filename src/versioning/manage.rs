use crate::error::ModpackError;
use crate::types::choice::BumpChoice;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::semver::{BumpKind, Version};
use crate::versioning::manifest::{load_manifest, manifest_version, save_manifest};
use crate::versioning::prompt::ChoicePrompter;
use std::path::Path;

/// The current version with the result of each possible bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub current: Version,
    pub patch: Version,
    pub minor: Version,
    pub major: Version,
}

impl Candidates {
    pub fn for_version(current: Version) -> Self {
        Candidates {
            current,
            patch: current.bump(BumpKind::Patch),
            minor: current.bump(BumpKind::Minor),
            major: current.bump(BumpKind::Major),
        }
    }

    pub fn resolve(&self, choice: BumpChoice) -> Version {
        match choice {
            BumpChoice::Patch => self.patch,
            BumpChoice::Minor => self.minor,
            BumpChoice::Major => self.major,
            BumpChoice::Keep => self.current,
        }
    }

    pub fn render_menu(&self) -> String {
        format!(
            "Current version: {}\n  1) patch -> {}\n  2) minor -> {}\n  3) major -> {}\n  4) none  (keep {})",
            self.current, self.patch, self.minor, self.major, self.current
        )
    }
}

/// Outcome of the version step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOutcome {
    pub previous: String,
    pub version: String,
    pub choice: BumpChoice,
}

impl VersionOutcome {
    pub fn changed(&self) -> bool {
        self.choice != BumpChoice::Keep
    }
}

/// Asks `prompter` until it gives a recognised answer.
pub fn ask_choice(
    prompter: &mut dyn ChoicePrompter,
    candidates: &Candidates,
) -> Result<BumpChoice, ModpackError> {
    prompter.show(&candidates.render_menu())?;
    loop {
        let answer = prompter.read_answer()?;
        match BumpChoice::from_answer(&answer) {
            Some(choice) => return Ok(choice),
            None => prompter.reject(&answer)?,
        }
    }
}

/// Reads the manifest, asks for a bump and rewrites the manifest when the
/// version changes. Returns the resulting version text.
///
/// ### Parameters
/// - `manifest_path`: The path of the manifest JSON file
/// - `prompter`: Where the bump choice comes from
///
pub fn select_version(
    manifest_path: &Path,
    prompter: &mut dyn ChoicePrompter,
) -> Result<VersionOutcome, ModpackError> {
    let mut manifest = load_manifest(manifest_path)?;
    let current = manifest_version(&manifest, manifest_path)?;
    let previous = manifest.version_number().unwrap_or_default().to_string();
    let candidates = Candidates::for_version(current);

    let choice = ask_choice(prompter, &candidates)?;
    if choice == BumpChoice::Keep {
        return Ok(VersionOutcome {
            version: previous.clone(),
            previous,
            choice,
        });
    }

    let next = candidates.resolve(choice).to_string();
    manifest.set_version_number(&next);
    save_manifest(manifest_path, &manifest)?;

    Ok(VersionOutcome {
        previous,
        version: next,
        choice,
    })
}

/// Runs [`select_version`] and reports the result.
pub fn run_version_step(
    manifest_path: &Path,
    prompter: &mut dyn ChoicePrompter,
) -> Result<VersionOutcome, ModpackError> {
    let outcome = select_version(manifest_path, prompter)?;
    if outcome.changed() {
        Logger::new().log_message(
            LogLevel::Success,
            &format!(
                "Version bumped ({}): {} -> {}",
                outcome.choice, outcome.previous, outcome.version
            ),
        );
    } else {
        Logger::new().log_message(
            LogLevel::Info,
            &format!("Keeping version {}", outcome.version),
        );
    }
    Ok(outcome)
}

/// Prints the manifest's current version and the bump candidates.
pub fn show_version(manifest_path: &Path) -> Result<Candidates, ModpackError> {
    let manifest = load_manifest(manifest_path)?;
    let candidates = Candidates::for_version(manifest_version(&manifest, manifest_path)?);
    let lines = [
        format!("patch -> {}", candidates.patch),
        format!("minor -> {}", candidates.minor),
        format!("major -> {}", candidates.major),
    ];
    Logger::new().log_message_with_trace(
        LogLevel::Info,
        &format!("Current version: {}", candidates.current),
        lines.iter().map(String::as_str).collect(),
    );
    Ok(candidates)
}
