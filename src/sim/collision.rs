//! Collision detection and response
//!
//! Walls clamp and reflect the heading; blocks use a closest-point test
//! between the ball's circle and the cell rectangle.

use std::f32::consts::PI;

use glam::Vec2;

use super::rect::Rect;
use super::state::Ball;
use crate::normalize_angle;

/// Heading after bouncing off a left or right wall, wrapped to [-π, π)
#[inline]
pub fn reflect_off_vertical_wall(angle: f32) -> f32 {
    normalize_angle(PI - angle)
}

/// Heading after bouncing off a top or bottom wall, wrapped to [-π, π)
#[inline]
pub fn reflect_off_horizontal_wall(angle: f32) -> f32 {
    normalize_angle(-angle)
}

/// Keep a ball inside a `width` x `height` playfield.
///
/// Each axis is handled on its own: an edge touching or past a boundary is
/// clamped back onto it and the heading reflected, so a corner hit reflects
/// both components.
pub fn resolve_walls(ball: &mut Ball, width: f32, height: f32) {
    let r = ball.radius;

    // Left or right walls
    if ball.pos.x - r <= 0.0 {
        ball.pos.x = r;
        ball.angle = reflect_off_vertical_wall(ball.angle);
    } else if ball.pos.x + r >= width {
        ball.pos.x = width - r;
        ball.angle = reflect_off_vertical_wall(ball.angle);
    }

    // Top or bottom walls
    if ball.pos.y - r <= 0.0 {
        ball.pos.y = r;
        ball.angle = reflect_off_horizontal_wall(ball.angle);
    } else if ball.pos.y + r >= height {
        ball.pos.y = height - r;
        ball.angle = reflect_off_horizontal_wall(ball.angle);
    }
}

/// Whether a circle overlaps a rectangle.
///
/// Strict: a circle exactly tangent to the rectangle does not overlap.
#[inline]
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Tone;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, angle: f32) -> Ball {
        Ball {
            id: 0,
            tone: Tone::White,
            pos: Vec2::new(x, y),
            radius: 15.0,
            speed: 80.0,
            angle,
        }
    }

    fn same_heading(a: f32, b: f32) -> bool {
        let d = normalize_angle(a - b);
        d.abs() < 1e-4 || (d.abs() - 2.0 * PI).abs() < 1e-4
    }

    #[test]
    fn test_left_wall_clamps_and_reflects() {
        let mut ball = ball_at(10.0, 300.0, 2.8);
        resolve_walls(&mut ball, 780.0, 600.0);
        assert_eq!(ball.pos.x, 15.0);
        assert_eq!(ball.pos.y, 300.0);
        assert!(same_heading(ball.angle, PI - 2.8));
    }

    #[test]
    fn test_right_wall_clamps_and_reflects() {
        let mut ball = ball_at(775.0, 300.0, 0.3);
        resolve_walls(&mut ball, 780.0, 600.0);
        assert_eq!(ball.pos.x, 765.0);
        assert!(same_heading(ball.angle, PI - 0.3));
    }

    #[test]
    fn test_top_and_bottom_walls() {
        let mut ball = ball_at(300.0, 5.0, -1.0);
        resolve_walls(&mut ball, 780.0, 600.0);
        assert_eq!(ball.pos.y, 15.0);
        assert_eq!(ball.angle, 1.0);

        let mut ball = ball_at(300.0, 590.0, 1.2);
        resolve_walls(&mut ball, 780.0, 600.0);
        assert_eq!(ball.pos.y, 585.0);
        assert_eq!(ball.angle, -1.2);
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let mut ball = ball_at(2.0, 598.0, 2.5);
        resolve_walls(&mut ball, 780.0, 600.0);
        assert_eq!(ball.pos, Vec2::new(15.0, 585.0));
        // (π - a) then negated
        assert!(same_heading(ball.angle, -(PI - 2.5)));
    }

    #[test]
    fn test_touching_wall_counts() {
        let mut ball = ball_at(15.0, 300.0, PI);
        resolve_walls(&mut ball, 780.0, 600.0);
        assert!(same_heading(ball.angle, 0.0));
    }

    #[test]
    fn test_reflection_wraps_large_heading() {
        // A heading many turns out still reflects into [-π, π)
        let mut ball = ball_at(5.0, 5.0, 17.4 + 20.0 * PI);
        resolve_walls(&mut ball, 780.0, 600.0);
        assert!(ball.angle >= -PI && ball.angle < PI);
        assert!(normalize_angle(ball.angle + (PI - 17.4)).abs() < 1e-3);
    }

    #[test]
    fn test_interior_ball_untouched() {
        let mut ball = ball_at(390.0, 300.0, 17.4);
        resolve_walls(&mut ball, 780.0, 600.0);
        assert_eq!(ball.pos, Vec2::new(390.0, 300.0));
        assert_eq!(ball.angle, 17.4);
    }

    #[test]
    fn test_corner_distance_threshold() {
        let rect = Rect::new(100.0, 100.0, 30.0, 20.0);
        let radius = 15.0;
        let eps = 0.01;
        // Diagonally off the top-left corner
        let dir = Vec2::new(-1.0, -1.0).normalize();
        let inside = rect.min + dir * (radius - eps);
        let outside = rect.min + dir * (radius + eps);
        assert!(circle_overlaps_rect(inside, radius, &rect));
        assert!(!circle_overlaps_rect(outside, radius, &rect));
    }

    #[test]
    fn test_tangent_is_not_a_hit() {
        let rect = Rect::new(100.0, 100.0, 30.0, 20.0);
        assert!(!circle_overlaps_rect(Vec2::new(85.0, 110.0), 15.0, &rect));
        assert!(circle_overlaps_rect(Vec2::new(85.5, 110.0), 15.0, &rect));
    }

    #[test]
    fn test_center_inside_rect_hits() {
        let rect = Rect::new(0.0, 0.0, 30.0, 20.0);
        assert!(circle_overlaps_rect(Vec2::new(15.0, 10.0), 1.0, &rect));
    }

    proptest! {
        #[test]
        fn prop_resolved_ball_stays_in_bounds(
            x in -200.0f32..1000.0,
            y in -200.0f32..800.0,
            angle in -20.0f32..20.0,
        ) {
            let mut ball = ball_at(x, y, angle);
            resolve_walls(&mut ball, 780.0, 600.0);
            prop_assert!(ball.pos.x >= ball.radius && ball.pos.x <= 780.0 - ball.radius);
            prop_assert!(ball.pos.y >= ball.radius && ball.pos.y <= 600.0 - ball.radius);
        }
    }
}
