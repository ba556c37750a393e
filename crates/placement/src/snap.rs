//! Door-connector snap resolution.
//!
//! The resolver transforms the selected template's connector slots by the
//! candidate transform, searches placed connectors within a fixed radius,
//! and — for pairs that face each other — corrects the candidate anchor so
//! the two connector positions coincide exactly. The correction is
//! translation-only: rotation stays under operator control.

use bevy::prelude::*;

use crate::config::CONNECTOR_SNAP_RADIUS;
use crate::templates::RoomTemplate;

/// A door connector transformed into world space.
#[derive(Debug, Clone, Copy)]
pub struct WorldConnector {
    pub pos: Vec3,
    pub facing: Vec3,
}

/// Transform every connector slot of `template` by the root transform.
pub fn world_connectors(template: &RoomTemplate, root: &Transform) -> Vec<WorldConnector> {
    template
        .connectors
        .iter()
        .map(|slot| WorldConnector {
            pos: root.transform_point(slot.local_pos),
            facing: (root.rotation * slot.local_facing).normalize_or_zero(),
        })
        .collect()
}

/// Two connectors qualify as facing each other when the normalized
/// position-delta vectors are anti-parallel. Coincident connectors are
/// degenerate: the zero vector cannot be normalized, so they never match.
pub fn connectors_oppose(a: Vec3, b: Vec3) -> bool {
    let a_to_b = (b - a).normalize_or_zero();
    let b_to_a = (a - b).normalize_or_zero();
    a_to_b.dot(b_to_a) < 0.0
}

/// Outcome of a successful snap resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// Corrected anchor position. Applying it makes the matched candidate
    /// connector coincide with the placed one.
    pub position: Vec3,
    /// Index of the candidate connector that produced the match.
    pub connector: usize,
    /// World position of the placed connector that was matched.
    pub target: Vec3,
}

/// Search placed connectors for a snap target. Every candidate connector is
/// tested against every placed connector inside the snap radius; when
/// several pairs qualify in the same pass, the last one evaluated wins.
pub fn resolve_snap(
    anchor: Vec3,
    candidate: &[WorldConnector],
    placed: &[WorldConnector],
) -> Option<SnapResult> {
    let mut result = None;
    for (index, cand) in candidate.iter().enumerate() {
        for other in placed {
            if cand.pos.distance(other.pos) >= CONNECTOR_SNAP_RADIUS {
                continue;
            }
            if !connectors_oppose(cand.pos, other.pos) {
                continue;
            }
            result = Some(SnapResult {
                position: anchor + (other.pos - cand.pos),
                connector: index,
                target: other.pos,
            });
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{ConnectorSlot, RoomTemplate, TemplatePart};

    fn connector(pos: Vec3) -> WorldConnector {
        WorldConnector {
            pos,
            facing: Vec3::X,
        }
    }

    #[test]
    fn distinct_points_always_oppose() {
        // normalize(P2-P1) . normalize(P1-P2) is -1 for any distinct pair.
        let p1 = Vec3::ZERO;
        let p2 = Vec3::new(2.0, 0.0, 0.0);
        let dot = (p2 - p1).normalize().dot((p1 - p2).normalize());
        assert_eq!(dot, -1.0);
        assert!(connectors_oppose(p1, p2));
        assert!(connectors_oppose(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, 9.0)));
    }

    #[test]
    fn coincident_connectors_are_degenerate() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(!connectors_oppose(p, p));
        // And a degenerate pair inside the radius must not produce a snap.
        let result = resolve_snap(Vec3::ZERO, &[connector(p)], &[connector(p)]);
        assert!(result.is_none());
    }

    #[test]
    fn snap_inside_radius_makes_connectors_coincide() {
        let anchor = Vec3::ZERO;
        let cand = connector(Vec3::new(4.0, 0.0, 0.0));
        let target = Vec3::new(5.5, 0.0, 0.0);
        let result = resolve_snap(anchor, &[cand], &[connector(target)]).unwrap();
        assert_eq!(result.position, Vec3::new(1.5, 0.0, 0.0));
        assert_eq!(result.connector, 0);
        assert_eq!(result.target, target);

        // Re-deriving the candidate connector from the corrected anchor
        // lands exactly on the placed connector.
        let corrected = result.position + (cand.pos - anchor);
        assert_eq!(corrected, target);
    }

    #[test]
    fn snap_radius_is_strict() {
        let cand = connector(Vec3::new(4.0, 0.0, 0.0));
        let at_radius = connector(Vec3::new(4.0 + crate::config::CONNECTOR_SNAP_RADIUS, 0.0, 0.0));
        assert!(resolve_snap(Vec3::ZERO, &[cand], &[at_radius]).is_none());

        let just_inside = connector(Vec3::new(
            4.0 + crate::config::CONNECTOR_SNAP_RADIUS - 0.1,
            0.0,
            0.0,
        ));
        assert!(resolve_snap(Vec3::ZERO, &[cand], &[just_inside]).is_some());
    }

    #[test]
    fn last_qualifying_match_wins() {
        let anchor = Vec3::ZERO;
        let candidates = [
            connector(Vec3::new(4.0, 0.0, 0.0)),
            connector(Vec3::new(-4.0, 0.0, 0.0)),
        ];
        let placed = [
            connector(Vec3::new(4.5, 0.0, 0.0)),
            connector(Vec3::new(-4.5, 0.0, 0.0)),
        ];
        let result = resolve_snap(anchor, &candidates, &placed).unwrap();
        assert_eq!(result.connector, 1);
        assert_eq!(result.position, Vec3::new(-0.5, 0.0, 0.0));
    }

    #[test]
    fn no_match_outside_radius_keeps_anchor_untouched() {
        let cand = connector(Vec3::new(4.0, 0.0, 0.0));
        let far = connector(Vec3::new(40.0, 0.0, 0.0));
        assert!(resolve_snap(Vec3::ZERO, &[cand], &[far]).is_none());
        assert!(resolve_snap(Vec3::ZERO, &[cand], &[]).is_none());
    }

    #[test]
    fn world_connectors_follow_root_rotation() {
        let template = RoomTemplate {
            name: "test",
            parts: vec![TemplatePart {
                size: Vec3::ONE,
                color: Color::WHITE,
                local: Transform::IDENTITY,
            }],
            connectors: vec![ConnectorSlot {
                local_pos: Vec3::new(4.0, 0.0, 0.0),
                local_facing: Vec3::X,
            }],
        };

        let root = Transform::from_translation(Vec3::new(10.0, 0.0, 0.0))
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        let connectors = world_connectors(&template, &root);
        assert_eq!(connectors.len(), 1);
        // Yaw of +90 degrees maps +X to -Z.
        assert!(connectors[0].pos.distance(Vec3::new(10.0, 0.0, -4.0)) < 1e-5);
        assert!(connectors[0].facing.distance(Vec3::NEG_Z) < 1e-5);
    }
}
