//! Collision detection between player boxes and stroked trail segments
//!
//! Markers move along the axes, so every trail segment is axis-aligned and
//! its stroked outline is exactly the bounding rect of its endpoints
//! inflated by half the stroke width. That keeps the whole resolver down to
//! rect-overlap tests.

use glam::Vec2;

use super::state::Trail;
use crate::Rect;
use crate::consts::TRAIL_WIDTH;

/// Bounding region of a segment stroked at the given width
pub fn segment_rect(p0: Vec2, p1: Vec2, width: f32) -> Rect {
    let half = Vec2::splat(width / 2.0);
    Rect::new(p0.min(p1) - half, p0.max(p1) + half)
}

/// Whether a bounding box overlaps any collidable segment of a trail.
/// The trail's safe-zone exemption has already been applied by
/// [`Trail::collidable_segments`]; an empty segment set never hits.
pub fn box_hits_trail(bounds: &Rect, trail: &Trail) -> bool {
    trail
        .collidable_segments()
        .any(|(p0, p1)| bounds.intersects(&segment_rect(p0, p1, TRAIL_WIDTH)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SAFE_ZONE_SAMPLES;

    #[test]
    fn test_segment_rect_horizontal() {
        let r = segment_rect(Vec2::new(10.0, 50.0), Vec2::new(40.0, 50.0), 5.0);
        assert_eq!(r.min, Vec2::new(7.5, 47.5));
        assert_eq!(r.max, Vec2::new(42.5, 52.5));
    }

    #[test]
    fn test_segment_rect_degenerate_point() {
        // A stationary marker produces zero-length segments; the stroke
        // width still gives them area
        let r = segment_rect(Vec2::new(20.0, 20.0), Vec2::new(20.0, 20.0), 5.0);
        assert_eq!(r.width(), 5.0);
        assert_eq!(r.height(), 5.0);
    }

    #[test]
    fn test_segment_rect_endpoint_order_irrelevant() {
        let a = segment_rect(Vec2::new(0.0, 0.0), Vec2::new(0.0, 30.0), 5.0);
        let b = segment_rect(Vec2::new(0.0, 30.0), Vec2::new(0.0, 0.0), 5.0);
        assert_eq!(a, b);
    }

    /// Trail with `extra` collidable samples walking left from `start`,
    /// padded with enough far-away samples to fill the safe zone.
    fn trail_ending_far_away(start: Vec2, extra: usize) -> Trail {
        let mut trail = Trail::new();
        for i in 0..extra {
            trail.append(start - Vec2::new(3.0 * i as f32, 0.0), i as f64 * 0.016);
        }
        for i in 0..SAFE_ZONE_SAMPLES {
            trail.append(Vec2::new(900.0, 900.0), (extra + i) as f64 * 0.016);
        }
        trail
    }

    #[test]
    fn test_box_hits_trail() {
        let trail = trail_ending_far_away(Vec2::new(115.0, 115.0), 4);
        // Box covering the collidable samples
        let bounds = Rect::from_pos_size(Vec2::new(100.0, 100.0), Vec2::new(30.0, 30.0));
        assert!(box_hits_trail(&bounds, &trail));

        // Box far away from every segment
        let bounds = Rect::from_pos_size(Vec2::new(500.0, 500.0), Vec2::new(30.0, 30.0));
        assert!(!box_hits_trail(&bounds, &trail));
    }

    #[test]
    fn test_box_misses_safe_zone_only_trail() {
        // All samples inside the safe zone: the box sits right on top of
        // them and still does not collide
        let mut trail = Trail::new();
        for i in 0..SAFE_ZONE_SAMPLES {
            trail.append(Vec2::new(115.0, 115.0 - 3.0 * i as f32), i as f64 * 0.016);
        }
        let bounds = Rect::from_pos_size(Vec2::new(100.0, 100.0), Vec2::new(30.0, 30.0));
        assert!(!box_hits_trail(&bounds, &trail));
    }

    #[test]
    fn test_empty_trail_never_hits() {
        let trail = Trail::new();
        let bounds = Rect::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(30.0, 30.0));
        assert!(!box_hits_trail(&bounds, &trail));
    }
}
