//! Planar geometry helpers shared by the surface builders and the
//! evaluator. All coordinates are feet in a runway-local frame.

use glam::DVec2;

use crate::utils::constants::CONTAINMENT_EPSILON;

/// Distance from `point` to the closed segment `a`-`b`.
pub fn point_segment_distance(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let length_squared = ab.length_squared();
    if length_squared == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / length_squared).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Whether `point` lies on the boundary of `ring`, within the containment
/// tolerance.
pub fn point_on_boundary(point: DVec2, ring: &[DVec2]) -> bool {
    let n = ring.len();
    if n < 2 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        if point_segment_distance(point, ring[j], ring[i]) <= CONTAINMENT_EPSILON {
            return true;
        }
        j = i;
    }
    false
}

/// Even-odd containment test, counting the boundary as inside.
///
/// `ring` is an ordered polygon without a repeated closing vertex.
pub fn point_in_polygon(point: DVec2, ring: &[DVec2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    if point_on_boundary(point, ring) {
        return true;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (ring[i], ring[j]);
        if (pi.y < point.y && pj.y >= point.y) || (pj.y < point.y && pi.y >= point.y) {
            if pi.x + (point.y - pi.y) / (pj.y - pi.y) * (pj.x - pi.x) < point.x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Twice-signed shoelace area over 2. Positive for counterclockwise rings.
pub fn signed_area(ring: &[DVec2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut j = n - 1;
    for i in 0..n {
        sum += ring[j].perp_dot(ring[i]);
        j = i;
    }
    sum / 2.0
}

/// Counterclockwise convex hull by monotone chain. Collinear points are
/// dropped; fewer than three distinct inputs come back unchanged.
pub fn convex_hull(points: &[DVec2]) -> Vec<DVec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let cross = |o: DVec2, a: DVec2, b: DVec2| (a - o).perp_dot(b - o);
    let mut hull: Vec<DVec2> = Vec::with_capacity(sorted.len() + 1);
    for &point in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], point) <= 0.0 {
            hull.pop();
        }
        hull.push(point);
    }
    let lower_len = hull.len() + 1;
    for &point in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(hull[hull.len() - 2], hull[hull.len() - 1], point) <= 0.0
        {
            hull.pop();
        }
        hull.push(point);
    }
    hull.pop();
    hull
}

/// Points along a full circle, one every `step` degrees, counterclockwise
/// from the positive x axis.
pub fn circle_points(center: DVec2, radius: f64, step: f64) -> Vec<DVec2> {
    let count = (360.0 / step).ceil() as usize;
    (0..count)
        .map(|i| {
            let angle = (i as f64 * step).to_radians();
            center + DVec2::from_angle(angle) * radius
        })
        .collect()
}
