// Geographic conversion
pub const FEET_PER_NAUTICAL_MILE: f64 = 6076.115_49; // ft
pub const FEET_PER_DEGREE_LATITUDE: f64 = 60.0 * FEET_PER_NAUTICAL_MILE; // ft
pub const MAX_REFERENCE_LATITUDE: f64 = 89.0; // degrees, flat-earth frame breaks down near the poles

// Surface dimensions fixed by 14 CFR 77.19
pub const PRIMARY_OVERRUN_LENGTH: f64 = 200.0; // ft past each end of a hard-surfaced runway
pub const HORIZONTAL_SURFACE_HEIGHT: f64 = 150.0; // ft above the established airport elevation
pub const CONICAL_SURFACE_EXTENT: f64 = 4000.0; // ft outward from the horizontal surface
pub const TRANSITIONAL_SLOPE: f64 = 1.0 / 7.0; // ft of rise per ft of run
pub const CONICAL_SLOPE: f64 = 1.0 / 20.0; // ft of rise per ft of run

// Geometric limits
pub const MIN_RUNWAY_LENGTH: f64 = 1.0; // ft, ends closer than this are coincident
pub const ARC_STEP: f64 = 1.0; // degrees of arc per boundary vertex
pub const CONTAINMENT_EPSILON: f64 = 1.0e-6; // ft, points this close to an edge count as inside
