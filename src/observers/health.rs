//! Health display observer.
//!
//! Treats the subject's state as the player's current health and shows it
//! (here: a log line standing in for a HUD draw call). Keeps the last seen
//! value so other code can read what the HUD currently displays.

use crate::subject::Observer;
use log::info;

/// Displays the subject's state as player health.
#[derive(Debug, Default)]
pub struct HealthHud {
    last_value: Option<i32>,
}

impl HealthHud {
    /// New HUD that has not yet received an update.
    pub fn new() -> Self {
        Self::default()
    }

    /// The value currently shown, or `None` before the first update.
    pub fn displayed(&self) -> Option<i32> {
        self.last_value
    }
}

impl Observer for HealthHud {
    fn notify(&mut self, value: i32) {
        self.last_value = Some(value);
        info!("[health] player health updated to {value}");
    }
}
