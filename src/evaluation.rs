//! Evaluates query points against a runway's built surfaces.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::surfaces::{RunwaySurfaces, SurfaceKind};
use crate::transform::GeoPoint;

/// An obstruction evaluation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Position to evaluate, decimal degrees.
    pub position: GeoPoint,
    /// Elevation of the structure top. [ft MSL]
    pub elevation: f64,
    /// Established airport elevation. [ft MSL]
    pub airport_elevation: f64,
}

impl Query {
    pub fn new(position: GeoPoint, elevation: f64, airport_elevation: f64) -> Self {
        Self {
            position,
            elevation,
            airport_elevation,
        }
    }
}

/// The governing surface at a query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneInfo {
    pub runway: String,
    pub surface: SurfaceKind,
    /// Runway end the governing surface extends from, when it has one.
    pub end: Option<String>,
    /// Regulated ceiling at the point. [ft MSL]
    pub ceiling_elevation: f64,
    /// Whether the queried elevation exceeds the ceiling.
    pub is_penetrating: bool,
}

/// Find the governing zone across several runways' surfaces.
///
/// Each runway is evaluated on its own; where more than one covers the
/// point, the zone with the lowest ceiling governs, since that is the
/// limit a structure must stay under.
pub fn evaluate_all<'a, I>(surfaces: I, query: &Query) -> Option<ZoneInfo>
where
    I: IntoIterator<Item = &'a RunwaySurfaces>,
{
    surfaces
        .into_iter()
        .filter_map(|runway| evaluate(runway, query))
        .min_by(|a, b| a.ceiling_elevation.total_cmp(&b.ceiling_elevation))
}

/// Find the highest-priority surface containing the query position.
///
/// Surfaces overlap in plan view; the first containing surface in the
/// built order (primary, approaches, transitionals, horizontal, conical)
/// governs. `None` means the point is outside every surface of this
/// runway, which is an answer rather than an error.
pub fn evaluate(surfaces: &RunwaySurfaces, query: &Query) -> Option<ZoneInfo> {
    let point = surfaces.frame().localize(query.position, query.elevation);
    let above_field = point.above_field(query.airport_elevation);

    for surface in surfaces.surfaces() {
        if surface.contains(point.position) {
            let ceiling = surface.ceiling_at(point.position);
            trace!(
                runway = surfaces.runway_name(),
                surface = %surface.kind(),
                ceiling,
                "query position is under a surface"
            );
            return Some(ZoneInfo {
                runway: surfaces.runway_name().to_string(),
                surface: surface.kind(),
                end: surface.end().map(str::to_string),
                ceiling_elevation: query.airport_elevation + ceiling,
                is_penetrating: above_field > ceiling,
            });
        }
    }
    None
}
