//! Conversion between geographic degrees and a runway-local planar frame.
//!
//! Part 77 dimensions are all given in feet, so every runway carries a flat
//! plane anchored at one of its ends. Positions are projected onto that plane
//! with an equirectangular approximation: one degree of latitude is a fixed
//! number of feet, one degree of longitude is scaled by the cosine of the
//! reference latitude. The error is negligible at the 10 nmi scale the
//! surfaces cover.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::utils::constants::FEET_PER_DEGREE_LATITUDE;

/// A geographic position in decimal degrees.
///
/// `x` increases eastward (longitude-like), `y` northward (latitude-like).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub x: f64, // [deg]
    pub y: f64, // [deg]
}

impl GeoPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position in a runway-local planar frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalPoint {
    /// Feet east and north of the frame reference.
    pub position: DVec2, // [ft]
    /// Height above mean sea level.
    pub elevation: f64, // [ft]
}

impl LocalPoint {
    pub fn new(position: DVec2, elevation: f64) -> Self {
        Self {
            position,
            elevation,
        }
    }

    /// Height above the established airport elevation.
    pub fn above_field(&self, airport_elevation: f64) -> f64 {
        self.elevation - airport_elevation
    }
}

/// A flat-earth frame anchored at a geographic reference point.
///
/// The frame is valid away from the poles; runway validation rejects
/// latitudes where the longitude scale collapses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalFrame {
    reference: GeoPoint,
    feet_per_degree_x: f64, // [ft/deg] cosine-scaled easting
}

impl LocalFrame {
    pub fn new(reference: GeoPoint) -> Self {
        let feet_per_degree_x = FEET_PER_DEGREE_LATITUDE * reference.y.to_radians().cos();
        Self {
            reference,
            feet_per_degree_x,
        }
    }

    pub fn reference(&self) -> GeoPoint {
        self.reference
    }

    /// Project a geographic position onto the frame plane, in feet.
    pub fn to_local(&self, point: GeoPoint) -> DVec2 {
        DVec2::new(
            (point.x - self.reference.x) * self.feet_per_degree_x,
            (point.y - self.reference.y) * FEET_PER_DEGREE_LATITUDE,
        )
    }

    /// Map a planar position in feet back to geographic degrees.
    pub fn from_local(&self, point: DVec2) -> GeoPoint {
        GeoPoint::new(
            self.reference.x + point.x / self.feet_per_degree_x,
            self.reference.y + point.y / FEET_PER_DEGREE_LATITUDE,
        )
    }

    /// Project a geographic position and MSL elevation into the frame.
    pub fn localize(&self, point: GeoPoint, elevation: f64) -> LocalPoint {
        LocalPoint::new(self.to_local(point), elevation)
    }
}
