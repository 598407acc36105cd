//! Stimulus scripts for the demo driver.
//!
//! A script is a JSON file listing the stimuli to feed the subject, so the
//! demo can run non-interactively:
//!
//! ```json
//! { "steps": ["raise", "raise", "lower", "reset"] }
//! ```
//!
//! Each stimulus maps to a counter change; the step sizes and reset value
//! come from [`HubConfig`].

use crate::config::HubConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One external stimulus for the demo counter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Stimulus {
    /// Raise the counter by the configured step.
    Raise,
    /// Lower the counter by the configured step.
    Lower,
    /// Jump the counter to the configured reset value.
    Reset,
}

impl Stimulus {
    /// Compute the counter value after applying this stimulus to `current`.
    pub fn apply(self, current: i32, config: &HubConfig) -> i32 {
        match self {
            Stimulus::Raise => current.saturating_add(config.raise_step),
            Stimulus::Lower => current.saturating_sub(config.lower_step),
            Stimulus::Reset => config.reset_value,
        }
    }

    /// Parse an interactive command line into a stimulus.
    ///
    /// Accepts the short forms `+`/`-` as well as the spelled-out names.
    pub fn parse_command(line: &str) -> Option<Self> {
        match line.trim() {
            "+" | "raise" => Some(Stimulus::Raise),
            "-" | "lower" => Some(Stimulus::Lower),
            "reset" => Some(Stimulus::Reset),
            _ => None,
        }
    }
}

/// An ordered list of stimuli loaded from a JSON file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StimulusScript {
    /// Stimuli in the order they should be applied.
    pub steps: Vec<Stimulus>,
}

impl StimulusScript {
    /// Loads a stimulus script from a JSON file at the specified path.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let file_content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script file {}: {}", path.display(), e))?;
        let script: StimulusScript = serde_json::from_str(&file_content)
            .map_err(|e| format!("Failed to parse script file {}: {}", path.display(), e))?;
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_follows_configured_steps() {
        let mut config = HubConfig::new();
        config.raise_step = 2;
        config.lower_step = 3;
        config.reset_value = 7;

        assert_eq!(Stimulus::Raise.apply(10, &config), 12);
        assert_eq!(Stimulus::Lower.apply(10, &config), 7);
        assert_eq!(Stimulus::Reset.apply(10, &config), 7);
    }

    #[test]
    fn test_apply_saturates_at_the_extremes() {
        let config = HubConfig::new();
        assert_eq!(Stimulus::Raise.apply(i32::MAX, &config), i32::MAX);
        assert_eq!(Stimulus::Lower.apply(i32::MIN, &config), i32::MIN);
    }

    #[test]
    fn test_parse_command_accepts_short_and_long_forms() {
        assert_eq!(Stimulus::parse_command(" + "), Some(Stimulus::Raise));
        assert_eq!(Stimulus::parse_command("raise"), Some(Stimulus::Raise));
        assert_eq!(Stimulus::parse_command("-"), Some(Stimulus::Lower));
        assert_eq!(Stimulus::parse_command("lower"), Some(Stimulus::Lower));
        assert_eq!(Stimulus::parse_command("reset"), Some(Stimulus::Reset));
        assert_eq!(Stimulus::parse_command("jump"), None);
        assert_eq!(Stimulus::parse_command(""), None);
    }

    #[test]
    fn test_script_deserializes_from_json() {
        let script: StimulusScript =
            serde_json::from_str(r#"{ "steps": ["raise", "lower", "reset"] }"#).unwrap();
        assert_eq!(
            script.steps,
            vec![Stimulus::Raise, Stimulus::Lower, Stimulus::Reset]
        );
    }

    #[test]
    fn test_script_rejects_unknown_stimuli() {
        let result: Result<StimulusScript, _> =
            serde_json::from_str(r#"{ "steps": ["explode"] }"#);
        assert!(result.is_err());
    }
}
