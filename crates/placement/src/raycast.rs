//! Pure ray-intersection math for cursor-to-world projection.
//!
//! The scene's collidable geometry is the ground plane plus one axis-aligned
//! box per placed room. Systems build the collider list fresh every frame
//! and take the nearest hit.

use bevy::prelude::*;

use crate::config::GROUND_HALF_EXTENT;

/// A world-space hit against the scene's collidable geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// Axis-aligned collider for one placed room.
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub center: Vec3,
    pub half_extents: Vec3,
}

/// Intersect a ray with the ground plane (y = 0, normal +Y). Hits outside
/// the buildable extent count as misses.
pub fn ray_ground(origin: Vec3, dir: Vec3) -> Option<SceneHit> {
    if dir.y.abs() < 1e-3 {
        return None;
    }
    let t = -origin.y / dir.y;
    if t <= 0.0 {
        return None;
    }
    let point = origin + dir * t;
    if point.x.abs() > GROUND_HALF_EXTENT || point.z.abs() > GROUND_HALF_EXTENT {
        return None;
    }
    Some(SceneHit {
        point,
        normal: Vec3::Y,
        distance: t,
    })
}

/// Slab-method ray/box intersection. Returns the entry hit with the normal
/// of the face the ray crossed; rays starting inside the box miss.
pub fn ray_aabb(origin: Vec3, dir: Vec3, collider: &Collider) -> Option<SceneHit> {
    let min = collider.center - collider.half_extents;
    let max = collider.center + collider.half_extents;

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut enter_axis = 0;

    for axis in 0..3 {
        if dir[axis].abs() < 1e-8 {
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / dir[axis];
        let mut t0 = (min[axis] - origin[axis]) * inv;
        let mut t1 = (max[axis] - origin[axis]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_enter {
            t_enter = t0;
            enter_axis = axis;
        }
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_enter <= 0.0 {
        return None;
    }

    let mut normal = Vec3::ZERO;
    normal[enter_axis] = -dir[enter_axis].signum();
    Some(SceneHit {
        point: origin + dir * t_enter,
        normal,
        distance: t_enter,
    })
}

/// Nearest hit among the ground plane and all placed-room colliders.
pub fn raycast_scene(origin: Vec3, dir: Vec3, colliders: &[Collider]) -> Option<SceneHit> {
    let mut best = ray_ground(origin, dir);
    for collider in colliders {
        if let Some(hit) = ray_aabb(origin, dir, collider) {
            if best.as_ref().map_or(true, |b| hit.distance < b.distance) {
                best = Some(hit);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_hit_straight_down() {
        let hit = ray_ground(Vec3::new(3.0, 10.0, -2.0), Vec3::NEG_Y).unwrap();
        assert_eq!(hit.point, Vec3::new(3.0, 0.0, -2.0));
        assert_eq!(hit.normal, Vec3::Y);
        assert_eq!(hit.distance, 10.0);
    }

    #[test]
    fn ground_miss_when_parallel_or_behind() {
        assert!(ray_ground(Vec3::new(0.0, 10.0, 0.0), Vec3::X).is_none());
        assert!(ray_ground(Vec3::new(0.0, 10.0, 0.0), Vec3::Y).is_none());
    }

    #[test]
    fn ground_miss_beyond_buildable_extent() {
        let origin = Vec3::new(GROUND_HALF_EXTENT * 2.0, 10.0, 0.0);
        assert!(ray_ground(origin, Vec3::NEG_Y).is_none());
    }

    #[test]
    fn aabb_entry_face_normal() {
        let collider = Collider {
            center: Vec3::ZERO,
            half_extents: Vec3::ONE,
        };
        let hit = ray_aabb(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X, &collider).unwrap();
        assert_eq!(hit.point, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(hit.normal, Vec3::X);
        assert_eq!(hit.distance, 4.0);

        let hit = ray_aabb(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, &collider).unwrap();
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn aabb_miss() {
        let collider = Collider {
            center: Vec3::ZERO,
            half_extents: Vec3::ONE,
        };
        assert!(ray_aabb(Vec3::new(5.0, 3.0, 0.0), Vec3::NEG_X, &collider).is_none());
        // Pointing away from the box.
        assert!(ray_aabb(Vec3::new(5.0, 0.0, 0.0), Vec3::X, &collider).is_none());
    }

    #[test]
    fn aabb_from_inside_is_a_miss() {
        let collider = Collider {
            center: Vec3::ZERO,
            half_extents: Vec3::ONE,
        };
        assert!(ray_aabb(Vec3::ZERO, Vec3::X, &collider).is_none());
    }

    #[test]
    fn nearest_hit_wins_over_ground() {
        let box_on_path = Collider {
            center: Vec3::new(0.0, 5.0, 0.0),
            half_extents: Vec3::ONE,
        };
        let hit = raycast_scene(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, &[box_on_path]).unwrap();
        assert_eq!(hit.point, Vec3::new(0.0, 6.0, 0.0));
        assert_eq!(hit.normal, Vec3::Y);

        // No colliders: falls through to the ground plane.
        let hit = raycast_scene(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, &[]).unwrap();
        assert_eq!(hit.point, Vec3::ZERO);
    }
}
