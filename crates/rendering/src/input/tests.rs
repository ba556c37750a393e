use bevy::input::mouse::MouseScrollUnit;
use bevy::math::Vec3;

use super::{anchor_from_hit, scroll_steps, wheel_delta};

#[test]
fn wheel_lines_pass_through_and_pixels_scale() {
    assert_eq!(wheel_delta(MouseScrollUnit::Line, 2.0), 2.0);
    assert_eq!(wheel_delta(MouseScrollUnit::Line, -1.0), -1.0);
    assert_eq!(wheel_delta(MouseScrollUnit::Pixel, 50.0), 0.5);
}

#[test]
fn no_scroll_means_no_steps() {
    assert_eq!(scroll_steps(0.0), 0);
}

#[test]
fn sub_line_deltas_still_step_once() {
    assert_eq!(scroll_steps(0.2), 1);
    assert_eq!(scroll_steps(-0.2), -1);
}

#[test]
fn multi_line_deltas_round_to_step_count() {
    assert_eq!(scroll_steps(1.0), 1);
    assert_eq!(scroll_steps(2.6), 3);
    assert_eq!(scroll_steps(-1.9), -2);
}

#[test]
fn anchor_seats_on_the_hit_surface() {
    // Ground hit: the room sits half its height above the floor.
    let anchor = anchor_from_hit(Vec3::new(3.0, 0.0, -2.0), Vec3::Y, 1.5);
    assert_eq!(anchor, Vec3::new(3.0, 1.5, -2.0));

    // Side hit: pushed out along the wall normal instead.
    let anchor = anchor_from_hit(Vec3::new(4.0, 1.0, 0.0), Vec3::X, 1.5);
    assert_eq!(anchor, Vec3::new(5.5, 1.0, 0.0));
}
