//! Constructs the five imaginary surfaces for a runway.
//!
//! All shaping happens in an axis frame: `u` feet along the centerline
//! from end1 toward end2, `v` feet to the left of that direction. Each
//! outline is then carried into the local east/north frame and paired
//! with its ceiling model.

use glam::DVec2;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::horizontal::stadium;
use super::surface::{CeilingModel, Surface, SurfaceKind};
use crate::classification::{RunwayDimensions, SurfaceDimensionSet};
use crate::geometry;
use crate::runway::{Runway, RunwayEnd};
use crate::transform::LocalFrame;
use crate::utils::constants::MIN_RUNWAY_LENGTH;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("runway {runway}: ends are {length:.2} ft apart, too close to orient the surfaces")]
    DegenerateRunway { runway: String, length: f64 },
}

/// The generated surfaces for one runway, in evaluation priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwaySurfaces {
    runway: String,
    frame: LocalFrame,
    dimensions: RunwayDimensions,
    surfaces: Vec<Surface>,
}

impl RunwaySurfaces {
    pub fn runway_name(&self) -> &str {
        &self.runway
    }

    /// The planar frame every surface vertex is expressed in, anchored at
    /// the end1 threshold.
    pub fn frame(&self) -> &LocalFrame {
        &self.frame
    }

    pub fn dimensions(&self) -> &RunwayDimensions {
        &self.dimensions
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn surfaces_of(&self, kind: SurfaceKind) -> impl Iterator<Item = &Surface> {
        self.surfaces.iter().filter(move |s| s.kind() == kind)
    }
}

/// Offsets along and across the centerline, in feet.
struct AxisFrame {
    origin: DVec2,
    along: DVec2, // unit, end1 toward end2
    left: DVec2,  // unit, 90 degrees counterclockwise of `along`
}

impl AxisFrame {
    fn point(&self, u: f64, v: f64) -> DVec2 {
        self.origin + self.along * u + self.left * v
    }
}

/// Describes one end's outbound geometry: where the approach inner edge
/// sits on the axis and which way the surface extends.
struct Outbound<'a> {
    end: &'a RunwayEnd,
    dims: &'a SurfaceDimensionSet,
    inner_u: f64,
    sign: f64,
}

/// Build all imaginary surfaces for `runway` from its resolved dimensions.
///
/// Pure and deterministic: the same inputs always produce the same
/// surfaces.
pub fn build(
    runway: &Runway,
    dimensions: &RunwayDimensions,
) -> Result<RunwaySurfaces, GeometryError> {
    let frame = LocalFrame::new(runway.end1().position);
    let p1 = frame.to_local(runway.end1().position);
    let p2 = frame.to_local(runway.end2().position);
    let length = p1.distance(p2);
    if length < MIN_RUNWAY_LENGTH {
        return Err(GeometryError::DegenerateRunway {
            runway: runway.name().to_string(),
            length,
        });
    }
    let along = (p2 - p1) / length;
    let axis = AxisFrame {
        origin: p1,
        along,
        left: along.perp(),
    };

    let d1 = &dimensions.end1;
    let d2 = &dimensions.end2;
    let near = -d1.primary_overrun;
    let far = length + d2.primary_overrun;
    let end1 = Outbound {
        end: runway.end1(),
        dims: d1,
        inner_u: near,
        sign: -1.0,
    };
    let end2 = Outbound {
        end: runway.end2(),
        dims: d2,
        inner_u: far,
        sign: 1.0,
    };

    let mut surfaces = Vec::with_capacity(11);
    surfaces.push(primary_surface(&axis, near, far, d1));
    surfaces.push(approach_surface(&axis, &end1));
    surfaces.push(approach_surface(&axis, &end2));
    rectangle_transitional_surfaces(&axis, near, far, d1, &mut surfaces);
    approach_transitional_surfaces(&axis, &end1, &mut surfaces);
    approach_transitional_surfaces(&axis, &end2, &mut surfaces);
    let (horizontal, horizontal_ring) = horizontal_surface(&axis, near, far, d1);
    surfaces.push(horizontal);
    surfaces.push(conical_surface(&axis, near, far, d1, horizontal_ring));

    debug!(
        runway = runway.name(),
        count = surfaces.len(),
        "built imaginary surfaces"
    );
    Ok(RunwaySurfaces {
        runway: runway.name().to_string(),
        frame,
        dimensions: *dimensions,
        surfaces,
    })
}

/// Map an axis-frame outline into the local frame as a counterclockwise
/// ring with heights.
fn oriented_ring(axis: &AxisFrame, outline: &[(f64, f64, f64)]) -> Vec<Vector3<f64>> {
    let mut ring: Vec<(DVec2, f64)> = outline
        .iter()
        .map(|&(u, v, z)| (axis.point(u, v), z))
        .collect();
    let flat: Vec<DVec2> = ring.iter().map(|&(p, _)| p).collect();
    if geometry::signed_area(&flat) < 0.0 {
        ring.reverse();
    }
    ring.into_iter()
        .map(|(p, z)| Vector3::new(p.x, p.y, z))
        .collect()
}

fn primary_surface(
    axis: &AxisFrame,
    near: f64,
    far: f64,
    dims: &SurfaceDimensionSet,
) -> Surface {
    let half = dims.primary_half_width();
    let outline = [
        (near, -half, 0.0),
        (far, -half, 0.0),
        (far, half, 0.0),
        (near, half, 0.0),
    ];
    Surface::new(
        SurfaceKind::Primary,
        None,
        oriented_ring(axis, &outline),
        None,
        CeilingModel::Level { height: 0.0 },
    )
}

fn approach_surface(axis: &AxisFrame, outbound: &Outbound) -> Surface {
    let dims = outbound.dims;
    let (inner_u, sign) = (outbound.inner_u, outbound.sign);
    let inner_half = dims.primary_half_width();
    let outer_half = dims.approach_outer_half_width();
    let length = dims.approach_length;
    let outer_rise = dims.approach_rise(length);

    // Left inner corner, out the left flare, across the outer edge, back
    // down the right flare. Precision approaches pick up a vertex where
    // the slope breaks.
    let mut outline: Vec<(f64, f64, f64)> = Vec::with_capacity(6);
    outline.push((inner_u, inner_half, 0.0));
    if let Some(extension) = dims.approach_extension {
        let break_half = dims.approach_half_width_at(extension.start);
        let break_rise = dims.approach_rise(extension.start);
        outline.push((inner_u + sign * extension.start, break_half, break_rise));
        outline.push((inner_u + sign * length, outer_half, outer_rise));
        outline.push((inner_u + sign * length, -outer_half, outer_rise));
        outline.push((inner_u + sign * extension.start, -break_half, break_rise));
    } else {
        outline.push((inner_u + sign * length, outer_half, outer_rise));
        outline.push((inner_u + sign * length, -outer_half, outer_rise));
    }
    outline.push((inner_u, -inner_half, 0.0));

    let ceiling = CeilingModel::Ramp {
        origin: axis.point(inner_u, 0.0),
        direction: axis.along * sign,
        slope: dims.approach_slope,
        length,
        extension: dims.approach_extension,
    };
    Surface::new(
        SurfaceKind::Approach,
        Some(outbound.end.name.clone()),
        oriented_ring(axis, &outline),
        None,
        ceiling,
    )
}

/// The two panels flanking the primary surface, rising 7:1 from its long
/// edges out to the horizontal surface height.
fn rectangle_transitional_surfaces(
    axis: &AxisFrame,
    near: f64,
    far: f64,
    dims: &SurfaceDimensionSet,
    surfaces: &mut Vec<Surface>,
) {
    let half = dims.primary_half_width();
    let top = dims.horizontal_height;
    let reach = top / dims.transitional_slope;

    for side in [1.0, -1.0] {
        let outline = [
            (near, side * half, 0.0),
            (far, side * half, 0.0),
            (far, side * (half + reach), top),
            (near, side * (half + reach), top),
        ];
        let ceiling = CeilingModel::plane_through(
            (axis.point(near, side * half), 0.0),
            (axis.point(far, side * half), 0.0),
            (axis.point(near, side * (half + reach)), top),
        );
        surfaces.push(Surface::new(
            SurfaceKind::Transitional,
            None,
            oriented_ring(axis, &outline),
            None,
            ceiling,
        ));
    }
}

/// The two panels flanking one approach surface. Each closes at the
/// distance where the approach ceiling reaches the horizontal surface
/// height, so the footprint is a triangle.
fn approach_transitional_surfaces(
    axis: &AxisFrame,
    outbound: &Outbound,
    surfaces: &mut Vec<Surface>,
) {
    let dims = outbound.dims;
    let (inner_u, sign) = (outbound.inner_u, outbound.sign);
    let half = dims.primary_half_width();
    let top = dims.horizontal_height;
    let reach = top / dims.transitional_slope;

    let run = dims.approach_run_to_rise(top);
    let apex_half = dims.approach_half_width_at(run);

    for side in [1.0, -1.0] {
        let corners = [
            (axis.point(inner_u, side * half), 0.0),
            (axis.point(inner_u + sign * run, side * apex_half), top),
            (axis.point(inner_u, side * (half + reach)), top),
        ];
        let outline = [
            (inner_u, side * half, 0.0),
            (inner_u + sign * run, side * apex_half, top),
            (inner_u, side * (half + reach), top),
        ];
        let ceiling = CeilingModel::plane_through(corners[0], corners[1], corners[2]);
        surfaces.push(Surface::new(
            SurfaceKind::Transitional,
            Some(outbound.end.name.clone()),
            oriented_ring(axis, &outline),
            None,
            ceiling,
        ));
    }
}

fn horizontal_surface(
    axis: &AxisFrame,
    near: f64,
    far: f64,
    dims: &SurfaceDimensionSet,
) -> (Surface, Vec<DVec2>) {
    let ring = stadium(
        axis.point(near, 0.0),
        axis.point(far, 0.0),
        dims.horizontal_radius,
    );
    let boundary = ring
        .iter()
        .map(|p| Vector3::new(p.x, p.y, dims.horizontal_height))
        .collect();
    let surface = Surface::new(
        SurfaceKind::Horizontal,
        None,
        boundary,
        None,
        CeilingModel::Level {
            height: dims.horizontal_height,
        },
    );
    (surface, ring)
}

fn conical_surface(
    axis: &AxisFrame,
    near: f64,
    far: f64,
    dims: &SurfaceDimensionSet,
    inner_ring: Vec<DVec2>,
) -> Surface {
    let focus1 = axis.point(near, 0.0);
    let focus2 = axis.point(far, 0.0);
    let top = dims.horizontal_height + dims.conical_slope * dims.conical_extent;
    let outer = stadium(focus1, focus2, dims.horizontal_radius + dims.conical_extent);

    let boundary = outer.iter().map(|p| Vector3::new(p.x, p.y, top)).collect();
    let hole = inner_ring
        .iter()
        .map(|p| Vector3::new(p.x, p.y, dims.horizontal_height))
        .collect();
    Surface::new(
        SurfaceKind::Conical,
        None,
        boundary,
        Some(hole),
        CeilingModel::Radial {
            focus1,
            focus2,
            inner_radius: dims.horizontal_radius,
            base: dims.horizontal_height,
            slope: dims.conical_slope,
            extent: dims.conical_extent,
        },
    )
}
