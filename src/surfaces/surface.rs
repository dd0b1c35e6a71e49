//! Surface representation: an ordered 3D boundary ring plus the ceiling
//! model giving the regulated height anywhere on the footprint.

use std::fmt;

use glam::DVec2;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::classification::ApproachExtension;
use crate::geometry;

/// The five imaginary surface categories, in evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Primary,
    Approach,
    Transitional,
    Horizontal,
    Conical,
}

impl SurfaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceKind::Primary => "Primary",
            SurfaceKind::Approach => "Approach",
            SurfaceKind::Transitional => "Transitional",
            SurfaceKind::Horizontal => "Horizontal",
            SurfaceKind::Conical => "Conical",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a surface's ceiling varies over its footprint.
///
/// Heights are feet above the established airport elevation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CeilingModel {
    /// Constant height.
    Level { height: f64 },
    /// Linear in the plane: `base` at `origin`, changing along `gradient`.
    Plane {
        origin: DVec2,
        base: f64,
        gradient: DVec2, // [ft per ft]
    },
    /// Piecewise-linear along an outbound direction (approach surfaces).
    Ramp {
        origin: DVec2,
        direction: DVec2, // unit, pointing away from the runway
        slope: f64,
        length: f64,
        extension: Option<ApproachExtension>,
    },
    /// Rising with distance from the runway line beyond an inner radius
    /// (the conical surface).
    Radial {
        focus1: DVec2,
        focus2: DVec2,
        inner_radius: f64,
        base: f64,
        slope: f64,
        extent: f64,
    },
}

impl CeilingModel {
    /// Ceiling height above the established airport elevation at a
    /// footprint point.
    pub fn height_at(&self, point: DVec2) -> f64 {
        match self {
            CeilingModel::Level { height } => *height,
            CeilingModel::Plane {
                origin,
                base,
                gradient,
            } => base + gradient.dot(point - *origin),
            CeilingModel::Ramp {
                origin,
                direction,
                slope,
                length,
                extension,
            } => {
                let distance = (point - *origin).dot(*direction).clamp(0.0, *length);
                match extension {
                    Some(ext) if distance > ext.start => {
                        ext.start * slope + (distance - ext.start) * ext.slope
                    }
                    _ => distance * slope,
                }
            }
            CeilingModel::Radial {
                focus1,
                focus2,
                inner_radius,
                base,
                slope,
                extent,
            } => {
                let distance = geometry::point_segment_distance(point, *focus1, *focus2);
                let outward = (distance - inner_radius).clamp(0.0, *extent);
                base + outward * slope
            }
        }
    }

    /// The plane through three non-collinear points, each given as a
    /// footprint position and its height.
    pub(crate) fn plane_through(a: (DVec2, f64), b: (DVec2, f64), c: (DVec2, f64)) -> Self {
        let e1 = b.0 - a.0;
        let e2 = c.0 - a.0;
        let d1 = b.1 - a.1;
        let d2 = c.1 - a.1;
        let det = e1.perp_dot(e2);
        debug_assert!(det.abs() > f64::EPSILON, "collinear plane points");
        let gradient = DVec2::new(d1 * e2.y - d2 * e1.y, e1.x * d2 - e2.x * d1) / det;
        CeilingModel::Plane {
            origin: a.0,
            base: a.1,
            gradient,
        }
    }
}

/// One imaginary surface: its boundary ring with heights, an optional
/// inner hole, and the ceiling model over the footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    kind: SurfaceKind,
    end: Option<String>,
    /// Counterclockwise boundary, x and y in local feet, z in feet above
    /// the established airport elevation. Not explicitly closed.
    boundary: Vec<Vector3<f64>>,
    /// Inner ring excluded from the footprint. Only the conical surface
    /// carries one, where it wraps the horizontal surface.
    hole: Option<Vec<Vector3<f64>>>,
    ceiling: CeilingModel,
}

impl Surface {
    pub(crate) fn new(
        kind: SurfaceKind,
        end: Option<String>,
        boundary: Vec<Vector3<f64>>,
        hole: Option<Vec<Vector3<f64>>>,
        ceiling: CeilingModel,
    ) -> Self {
        Self {
            kind,
            end,
            boundary,
            hole,
            ceiling,
        }
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// The runway end a surface extends from, set for approach surfaces
    /// and their flanking transitional panels.
    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    pub fn boundary(&self) -> &[Vector3<f64>] {
        &self.boundary
    }

    pub fn hole(&self) -> Option<&[Vector3<f64>]> {
        self.hole.as_deref()
    }

    pub fn ceiling(&self) -> &CeilingModel {
        &self.ceiling
    }

    /// The 2D outline of the boundary ring.
    pub fn footprint(&self) -> Vec<DVec2> {
        self.boundary.iter().map(|v| DVec2::new(v.x, v.y)).collect()
    }

    pub fn hole_footprint(&self) -> Option<Vec<DVec2>> {
        self.hole
            .as_ref()
            .map(|ring| ring.iter().map(|v| DVec2::new(v.x, v.y)).collect())
    }

    /// Whether the footprint contains `point`. The outer boundary counts
    /// as inside; so does the hole boundary, but not the hole interior.
    pub fn contains(&self, point: DVec2) -> bool {
        if !geometry::point_in_polygon(point, &self.footprint()) {
            return false;
        }
        match self.hole_footprint() {
            Some(hole) => {
                !geometry::point_in_polygon(point, &hole)
                    || geometry::point_on_boundary(point, &hole)
            }
            None => true,
        }
    }

    /// Ceiling height above the established airport elevation at `point`.
    pub fn ceiling_at(&self, point: DVec2) -> f64 {
        self.ceiling.height_at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring(points: &[(f64, f64, f64)]) -> Vec<Vector3<f64>> {
        points.iter().map(|&(x, y, z)| Vector3::new(x, y, z)).collect()
    }

    #[test]
    fn test_level_ceiling_is_constant() {
        let model = CeilingModel::Level { height: 150.0 };
        assert_relative_eq!(model.height_at(DVec2::new(0.0, 0.0)), 150.0);
        assert_relative_eq!(model.height_at(DVec2::new(-4000.0, 900.0)), 150.0);
    }

    #[test]
    fn test_plane_through_recovers_its_defining_points() {
        let a = (DVec2::new(0.0, 250.0), 0.0);
        let b = (DVec2::new(1000.0, 250.0), 0.0);
        let c = (DVec2::new(0.0, 1300.0), 150.0);
        let model = CeilingModel::plane_through(a, b, c);

        assert_relative_eq!(model.height_at(a.0), a.1, epsilon = 1.0e-9);
        assert_relative_eq!(model.height_at(b.0), b.1, epsilon = 1.0e-9);
        assert_relative_eq!(model.height_at(c.0), c.1, epsilon = 1.0e-9);
        // 7:1 rise away from the inner edge
        assert_relative_eq!(model.height_at(DVec2::new(500.0, 250.0 + 700.0)), 100.0);
    }

    #[test]
    fn test_ramp_ceiling_rises_then_shallows() {
        let model = CeilingModel::Ramp {
            origin: DVec2::new(0.0, 0.0),
            direction: DVec2::new(-1.0, 0.0),
            slope: 1.0 / 50.0,
            length: 50_000.0,
            extension: Some(ApproachExtension {
                start: 10_000.0,
                slope: 1.0 / 40.0,
            }),
        };

        assert_relative_eq!(model.height_at(DVec2::new(0.0, 0.0)), 0.0);
        assert_relative_eq!(model.height_at(DVec2::new(-5000.0, 123.0)), 100.0);
        assert_relative_eq!(model.height_at(DVec2::new(-10_000.0, 0.0)), 200.0);
        assert_relative_eq!(model.height_at(DVec2::new(-14_000.0, 0.0)), 300.0);
        // Behind the origin the ramp has not started
        assert_relative_eq!(model.height_at(DVec2::new(2000.0, 0.0)), 0.0);
    }

    #[test]
    fn test_radial_ceiling_clamps_at_both_rims() {
        let model = CeilingModel::Radial {
            focus1: DVec2::new(0.0, 0.0),
            focus2: DVec2::new(5000.0, 0.0),
            inner_radius: 10_000.0,
            base: 150.0,
            slope: 1.0 / 20.0,
            extent: 4000.0,
        };

        // On the inner rim
        assert_relative_eq!(model.height_at(DVec2::new(2500.0, 10_000.0)), 150.0);
        // 2000 ft out
        assert_relative_eq!(model.height_at(DVec2::new(2500.0, 12_000.0)), 250.0);
        // On and past the outer rim
        assert_relative_eq!(model.height_at(DVec2::new(2500.0, 14_000.0)), 350.0);
        assert_relative_eq!(model.height_at(DVec2::new(2500.0, 20_000.0)), 350.0);
    }

    #[test]
    fn test_contains_respects_the_hole() {
        let outer = ring(&[
            (-100.0, -100.0, 350.0),
            (100.0, -100.0, 350.0),
            (100.0, 100.0, 350.0),
            (-100.0, 100.0, 350.0),
        ]);
        let hole = ring(&[
            (-50.0, -50.0, 150.0),
            (50.0, -50.0, 150.0),
            (50.0, 50.0, 150.0),
            (-50.0, 50.0, 150.0),
        ]);
        let surface = Surface::new(
            SurfaceKind::Conical,
            None,
            outer,
            Some(hole),
            CeilingModel::Level { height: 350.0 },
        );

        // In the annulus body
        assert!(surface.contains(DVec2::new(75.0, 0.0)));
        // Boundaries are inclusive on both rings
        assert!(surface.contains(DVec2::new(100.0, 0.0)));
        assert!(surface.contains(DVec2::new(50.0, 0.0)));
        // Strictly inside the hole, and strictly outside
        assert!(!surface.contains(DVec2::new(0.0, 0.0)));
        assert!(!surface.contains(DVec2::new(150.0, 0.0)));
    }

    #[test]
    fn test_footprint_projects_the_boundary() {
        let surface = Surface::new(
            SurfaceKind::Primary,
            None,
            ring(&[(0.0, 0.0, 0.0), (10.0, 0.0, 0.0), (10.0, 5.0, 0.0), (0.0, 5.0, 0.0)]),
            None,
            CeilingModel::Level { height: 0.0 },
        );
        let footprint = surface.footprint();
        assert_eq!(footprint.len(), 4);
        assert_eq!(footprint[2], DVec2::new(10.0, 5.0));
    }
}
