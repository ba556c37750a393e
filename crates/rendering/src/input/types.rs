use bevy::prelude::*;

use placement::snap::SnapResult;

/// Latest cursor-to-world projection result, recomputed every frame. A miss
/// (`valid == false`) is the idle state, not an error.
#[derive(Resource, Default)]
pub struct CursorHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub valid: bool,
}

/// Connector snapping: whether it is enabled, and the match resolved this
/// frame (if any).
#[derive(Resource)]
pub struct SnapState {
    pub enabled: bool,
    pub matched: Option<SnapResult>,
}

impl Default for SnapState {
    fn default() -> Self {
        Self {
            enabled: true,
            matched: None,
        }
    }
}

/// Whether the placement tool is engaged. The per-frame placement systems
/// are registered behind this flag, so disengaging it unhooks them the way
/// a tool's deactivation callback would.
#[derive(Resource)]
pub struct EditorActive(pub bool);

impl Default for EditorActive {
    fn default() -> Self {
        Self(true)
    }
}

/// Run condition for the placement pipeline.
pub fn editor_active(active: Res<EditorActive>) -> bool {
    active.0
}

/// Status message shown briefly on screen
#[derive(Resource, Default)]
pub struct StatusMessage {
    pub text: String,
    pub timer: f32,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>, is_error: bool) {
        self.text = text.into();
        self.timer = 3.0;
        self.is_error = is_error;
    }

    pub fn active(&self) -> bool {
        self.timer > 0.0
    }
}
