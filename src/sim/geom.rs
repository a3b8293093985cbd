//! Swept-circle geometry
//!
//! The one non-trivial geometric primitive in the game: does the projectile's
//! motion segment for this tick cross the pile circle? Everything else
//! (distances, normalization) comes straight from `glam::Vec2`.

use glam::Vec2;

/// Test whether the segment `p0`→`p1` intersects the circle at `center`.
///
/// Parameterize the segment as `p0 + t*(p1 - p0)` and solve the quadratic
/// `|p(t) - center|² = radius²`; a hit is any root with `t` in `[0, 1]`.
/// A degenerate segment (`p0 == p1`) has a zero leading coefficient, so it
/// is tested directly as point-in-circle instead of dividing by zero.
pub fn segment_circle_intersect(p0: Vec2, p1: Vec2, center: Vec2, radius: f32) -> bool {
    let d = p1 - p0;
    let f = p0 - center;

    let a = d.length_squared();
    if a <= f32::EPSILON {
        // Degenerate segment: point-in-circle
        return f.length_squared() <= radius * radius;
    }

    let b = 2.0 * f.dot(d);
    let c = f.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        // Also guards the tangent-graze case drifting negative from
        // floating-point error: treated as a miss, never a fault
        return false;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_segment_through_center() {
        // Horizontal segment passing exactly through the circle center
        assert!(segment_circle_intersect(
            Vec2::new(-100.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::ZERO,
            1.0,
        ));
    }

    #[test]
    fn test_segment_clear_miss() {
        assert!(!segment_circle_intersect(
            Vec2::new(-100.0, 50.0),
            Vec2::new(100.0, 50.0),
            Vec2::ZERO,
            28.0,
        ));
    }

    #[test]
    fn test_segment_stops_short() {
        // Segment pointed at the circle but ending before reaching it
        assert!(!segment_circle_intersect(
            Vec2::new(-100.0, 0.0),
            Vec2::new(-50.0, 0.0),
            Vec2::ZERO,
            28.0,
        ));
    }

    #[test]
    fn test_segment_grazes_edge() {
        // Chord at y = 20 through a radius-28 circle
        assert!(segment_circle_intersect(
            Vec2::new(-100.0, 20.0),
            Vec2::new(100.0, 20.0),
            Vec2::ZERO,
            28.0,
        ));
    }

    #[test]
    fn test_degenerate_point_inside() {
        let p = Vec2::new(10.0, 10.0);
        assert!(segment_circle_intersect(p, p, Vec2::new(12.0, 10.0), 5.0));
    }

    #[test]
    fn test_degenerate_point_outside() {
        let p = Vec2::new(10.0, 10.0);
        assert!(!segment_circle_intersect(p, p, Vec2::new(50.0, 10.0), 5.0));
    }

    #[test]
    fn test_fast_tunnel_is_caught() {
        // One 50ms tick at max throw speed covers 30 units - more than a
        // pile diameter; the swept test must still register the crossing
        let prev = Vec2::new(400.0, 270.0);
        let curr = Vec2::new(500.0, 270.0);
        assert!(segment_circle_intersect(prev, curr, Vec2::new(450.0, 270.0), 28.0));
    }

    proptest! {
        #[test]
        fn prop_symmetric_under_endpoint_swap(
            x0 in -500.0f32..500.0, y0 in -500.0f32..500.0,
            x1 in -500.0f32..500.0, y1 in -500.0f32..500.0,
            cx in -200.0f32..200.0, cy in -200.0f32..200.0,
            r in 0.1f32..100.0,
        ) {
            let p0 = Vec2::new(x0, y0);
            let p1 = Vec2::new(x1, y1);
            let c = Vec2::new(cx, cy);
            prop_assert_eq!(
                segment_circle_intersect(p0, p1, c, r),
                segment_circle_intersect(p1, p0, c, r)
            );
        }

        #[test]
        fn prop_through_center_always_hits(
            angle in 0.0f32..std::f32::consts::TAU,
            r in 0.1f32..100.0,
        ) {
            // A long segment through the center hits for any positive radius
            let dir = Vec2::new(angle.cos(), angle.sin());
            let c = Vec2::new(37.0, -12.0);
            prop_assert!(segment_circle_intersect(c - dir * 1000.0, c + dir * 1000.0, c, r));
        }

        #[test]
        fn prop_entering_segment_hits(
            x0 in -200.0f32..200.0, y0 in -200.0f32..200.0,
            x1 in 400.0f32..500.0, y1 in -500.0f32..500.0,
        ) {
            // Starts inside the radius-300 circle, ends outside: the exit
            // crossing must be reported
            let c = Vec2::ZERO;
            let p0 = Vec2::new(x0, y0); // within 283 of origin
            let p1 = Vec2::new(x1, y1); // at least 400 from origin
            prop_assert!(segment_circle_intersect(p0, p1, c, 300.0));
        }
    }
}
