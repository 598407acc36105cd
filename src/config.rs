//! Demo configuration.
//!
//! Manages the demo driver's settings loaded from an INI configuration
//! file. Provides defaults for safe startup and methods to load/save
//! configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [demo]
//! initial_state = 100
//! raise_step = 1
//! lower_step = 1
//! reset_value = 0
//!
//! [eventlog]
//! file = events.log
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_INITIAL_STATE: i32 = 100;
const DEFAULT_RAISE_STEP: i32 = 1;
const DEFAULT_LOWER_STEP: i32 = 1;
const DEFAULT_RESET_VALUE: i32 = 0;
const DEFAULT_CONFIG_PATH: &str = "./signalhub.ini";

/// Demo driver configuration.
///
/// Stores the counter parameters for the stimulus-driven demo and the
/// optional event log sink path. Values missing from the file keep their
/// defaults.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Counter value the demo starts from.
    pub initial_state: i32,
    /// Amount added by a raise stimulus.
    pub raise_step: i32,
    /// Amount subtracted by a lower stimulus.
    pub lower_step: i32,
    /// Counter value a reset stimulus jumps to.
    pub reset_value: i32,
    /// Optional path the event log observer mirrors events to.
    pub eventlog_file: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HubConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            initial_state: DEFAULT_INITIAL_STATE,
            raise_step: DEFAULT_RAISE_STEP,
            lower_step: DEFAULT_LOWER_STEP,
            reset_value: DEFAULT_RESET_VALUE,
            eventlog_file: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [demo] section. Values outside i32 range are rejected, not wrapped.
        if let Some(initial) = getint_i32(&config, "demo", "initial_state") {
            self.initial_state = initial;
        }
        if let Some(step) = getint_i32(&config, "demo", "raise_step") {
            self.raise_step = step;
        }
        if let Some(step) = getint_i32(&config, "demo", "lower_step") {
            self.lower_step = step;
        }
        if let Some(reset) = getint_i32(&config, "demo", "reset_value") {
            self.reset_value = reset;
        }

        // [eventlog] section
        if let Some(file) = config.get("eventlog", "file") {
            if !file.trim().is_empty() {
                self.eventlog_file = Some(PathBuf::from(file));
            }
        }

        info!(
            "Loaded config: initial_state={}, raise_step={}, lower_step={}, reset_value={}, eventlog_file={:?}",
            self.initial_state,
            self.raise_step,
            self.lower_step,
            self.reset_value,
            self.eventlog_file
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [demo] section
        config.set("demo", "initial_state", Some(self.initial_state.to_string()));
        config.set("demo", "raise_step", Some(self.raise_step.to_string()));
        config.set("demo", "lower_step", Some(self.lower_step.to_string()));
        config.set("demo", "reset_value", Some(self.reset_value.to_string()));

        // [eventlog] section
        if let Some(file) = &self.eventlog_file {
            config.set("eventlog", "file", Some(file.display().to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

/// Read an integer key, dropping values that do not fit in an i32.
fn getint_i32(config: &Ini, section: &str, key: &str) -> Option<i32> {
    config
        .getint(section, key)
        .ok()
        .flatten()
        .and_then(|value| i32::try_from(value).ok())
}
