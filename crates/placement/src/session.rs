//! Per-session placement state: template selection, quantized rotation, and
//! the candidate transform derived from the latest cursor hit.

use bevy::prelude::*;

/// Discrete phase of the placement session for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Nothing previewable: empty library or no cursor hit this frame.
    #[default]
    Idle,
    /// A template is selected and the cursor hits the scene; the ghost
    /// preview follows the resolved transform.
    Previewing,
}

/// Live placement-session state, recomputed from input every frame.
///
/// Selection is a ring over the library: cycling wraps with explicit modulo
/// arithmetic. Rotation is quantized to 90-degree yaw steps about +Y and
/// resets to identity whenever the selection changes. The snap override,
/// when present, supersedes the raw raycast anchor for the final transform.
#[derive(Resource, Default)]
pub struct PlacementSession {
    pub selected: usize,
    pub rotation_steps: i32,
    pub anchor: Option<Vec3>,
    pub snap_override: Option<Vec3>,
    pub phase: SessionPhase,
    /// Set once the empty-library warning has been logged, so the condition
    /// is reported a single time rather than every frame.
    pub warned_empty: bool,
}

impl PlacementSession {
    /// Advance (+1) or retreat (-1) the selected template, wrapping around
    /// the library. Returns whether the selection changed; any change
    /// resets rotation to identity.
    pub fn cycle_selection(&mut self, dir: i32, library_len: usize) -> bool {
        if library_len == 0 {
            return false;
        }
        let len = library_len as i32;
        let next = (self.selected as i32 + dir).rem_euclid(len) as usize;
        if next == self.selected {
            return false;
        }
        self.selected = next;
        self.rotation_steps = 0;
        true
    }

    /// Directly select a template by index (palette click). Resets rotation
    /// on an index change, same as cycling.
    pub fn select(&mut self, index: usize, library_len: usize) {
        if index >= library_len || index == self.selected {
            return;
        }
        self.selected = index;
        self.rotation_steps = 0;
    }

    /// Turn the candidate by one 90-degree step about +Y. Accumulates across
    /// frames and never resets on its own.
    pub fn rotate(&mut self, dir: i32) {
        self.rotation_steps = (self.rotation_steps + dir).rem_euclid(4);
    }

    /// Current quantized yaw.
    pub fn yaw(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_steps as f32 * std::f32::consts::FRAC_PI_2)
    }

    /// Final world position for preview and commit: the snap override
    /// supersedes the raw raycast anchor whenever both are present.
    pub fn resolved_position(&self) -> Option<Vec3> {
        self.snap_override.or(self.anchor)
    }

    /// Full candidate transform (position + quantized yaw, unit scale).
    pub fn resolved_transform(&self) -> Option<Transform> {
        self.resolved_position()
            .map(|pos| Transform::from_translation(pos).with_rotation(self.yaw()))
    }

    pub fn previewable(&self) -> bool {
        self.phase == SessionPhase::Previewing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_forward_then_back_returns_to_start() {
        let mut session = PlacementSession::default();
        let len = 5;
        for n in 1..=7 {
            for _ in 0..n {
                session.cycle_selection(1, len);
            }
            for _ in 0..n {
                session.cycle_selection(-1, len);
            }
            assert_eq!(session.selected, 0, "after {n} forward + {n} back");
        }
    }

    #[test]
    fn cycling_wraps_modulo_library_len() {
        let mut session = PlacementSession::default();
        session.cycle_selection(-1, 4);
        assert_eq!(session.selected, 3);
        session.cycle_selection(1, 4);
        assert_eq!(session.selected, 0);
    }

    #[test]
    fn cycling_an_empty_library_is_a_noop() {
        let mut session = PlacementSession::default();
        assert!(!session.cycle_selection(1, 0));
        assert_eq!(session.selected, 0);
    }

    #[test]
    fn four_rotation_steps_return_to_identity() {
        let mut session = PlacementSession::default();
        for _ in 0..4 {
            session.rotate(1);
        }
        assert_eq!(session.rotation_steps, 0);
        assert_eq!(session.yaw(), Quat::IDENTITY);
    }

    #[test]
    fn rotation_accumulates_in_both_directions() {
        let mut session = PlacementSession::default();
        session.rotate(-1);
        assert_eq!(session.rotation_steps, 3);
        session.rotate(-1);
        assert_eq!(session.rotation_steps, 2);
        session.rotate(1);
        assert_eq!(session.rotation_steps, 3);
    }

    #[test]
    fn selection_change_resets_rotation() {
        let mut session = PlacementSession::default();
        session.rotate(1);
        session.rotate(1);
        assert!(session.cycle_selection(1, 3));
        assert_eq!(session.rotation_steps, 0);

        session.rotate(1);
        session.select(0, 3);
        assert_eq!(session.rotation_steps, 0);
    }

    #[test]
    fn reselecting_the_same_template_keeps_rotation() {
        let mut session = PlacementSession::default();
        session.rotate(1);
        session.select(0, 3);
        assert_eq!(session.rotation_steps, 1);
    }

    #[test]
    fn snap_override_supersedes_anchor() {
        let mut session = PlacementSession {
            anchor: Some(Vec3::new(1.0, 0.0, 0.0)),
            ..default()
        };
        assert_eq!(session.resolved_position(), Some(Vec3::new(1.0, 0.0, 0.0)));

        session.snap_override = Some(Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(session.resolved_position(), Some(Vec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn no_anchor_means_no_resolved_transform() {
        let session = PlacementSession::default();
        assert!(session.resolved_transform().is_none());
        assert!(!session.previewable());
    }
}
