//! Debug domain: toggles and status for the movement overlay.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Draw pipe facings, exit points and player velocity
    pub show_gizmos: bool,
    /// Whether to show the movement info overlay
    pub show_info: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}
