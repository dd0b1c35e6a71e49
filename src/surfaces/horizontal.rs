//! Footprint of the horizontal surface: arcs of equal radius about each
//! end of the primary surface, joined by their common tangents.

use glam::DVec2;

use crate::geometry::{circle_points, convex_hull};
use crate::utils::constants::ARC_STEP;

/// The stadium outline swept by `radius` around the segment from
/// `center1` to `center2`, discretized one vertex per [`ARC_STEP`]
/// degrees of arc.
pub(crate) fn stadium(center1: DVec2, center2: DVec2, radius: f64) -> Vec<DVec2> {
    let mut points = circle_points(center1, radius, ARC_STEP);
    points.extend(circle_points(center2, radius, ARC_STEP));
    convex_hull(&points)
}
