//! Resolves a runway into the dimension set governing each of its surfaces.
//!
//! Resolution is a pure table lookup over [`tables`]: no geometry, no
//! partial results. Any combination the tables do not cover is an error
//! rather than a fallback row.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tables::{
    self, MinimumsBand, APPROACH_DIMENSIONS, HORIZONTAL_RADII, PRIMARY_WIDTHS,
};
use crate::runway::{ApproachType, Runway, RunwayEnd, RunwayType};
use crate::utils::constants::{
    CONICAL_SLOPE, CONICAL_SURFACE_EXTENT, HORIZONTAL_SURFACE_HEIGHT, PRIMARY_OVERRUN_LENGTH,
    TRANSITIONAL_SLOPE,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassificationError {
    #[error("runway {runway}: a visual runway cannot serve a {approach} approach at end {end}")]
    VisualRunwayInstrumentEnd {
        runway: String,
        end: String,
        approach: ApproachType,
    },

    #[error("runway {runway}: end {end} has a precision instrument approach but the runway is {runway_type}")]
    PrecisionApproachMismatch {
        runway: String,
        end: String,
        runway_type: RunwayType,
    },

    #[error("runway {runway}: designated {runway_type} but no end has a matching approach")]
    DesignationMismatch {
        runway: String,
        runway_type: RunwayType,
    },

    #[error("runway {runway}: end {end} needs visibility minimums of at least 3/4 statute mile, got {minimums}")]
    UnusableMinimums {
        runway: String,
        end: String,
        minimums: f64,
    },

    #[error("runway {runway}: no dimension row for a {runway_type} runway with a {approach} approach at end {end}")]
    UnrecognizedCombination {
        runway: String,
        end: String,
        runway_type: RunwayType,
        approach: ApproachType,
    },
}

/// The level of a precision approach beyond its sloped section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApproachExtension {
    /// Distance from the inner edge at which the extension begins. [ft]
    pub start: f64,
    /// Rise per foot of run beyond `start`.
    pub slope: f64,
}

/// Every dimension needed to build the surfaces off one runway end.
///
/// Lengths are in feet, slopes are rise per foot of run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDimensionSet {
    pub primary_width: f64,
    /// Primary surface reach past the runway end, 200 ft when hard-surfaced.
    pub primary_overrun: f64,
    pub approach_inner_width: f64,
    pub approach_outer_width: f64,
    /// Total reach of the approach surface, both sections.
    pub approach_length: f64,
    /// Slope of the first (or only) approach section.
    pub approach_slope: f64,
    pub approach_extension: Option<ApproachExtension>,
    pub transitional_slope: f64,
    pub horizontal_radius: f64,
    pub horizontal_height: f64,
    pub conical_slope: f64,
    pub conical_extent: f64,
}

impl SurfaceDimensionSet {
    pub fn primary_half_width(&self) -> f64 {
        self.primary_width / 2.0
    }

    pub fn approach_outer_half_width(&self) -> f64 {
        self.approach_outer_width / 2.0
    }

    /// Reach of the first sloped approach section.
    pub fn approach_first_length(&self) -> f64 {
        match self.approach_extension {
            Some(extension) => extension.start,
            None => self.approach_length,
        }
    }

    /// Ceiling rise of the approach surface at `distance` ft out from its
    /// inner edge. Distances are clamped to the surface reach.
    pub fn approach_rise(&self, distance: f64) -> f64 {
        let distance = distance.clamp(0.0, self.approach_length);
        match self.approach_extension {
            Some(extension) if distance > extension.start => {
                extension.start * self.approach_slope
                    + (distance - extension.start) * extension.slope
            }
            _ => distance * self.approach_slope,
        }
    }

    /// Distance from the inner edge at which the approach ceiling first
    /// reaches `rise` ft, clamped to the surface reach.
    pub fn approach_run_to_rise(&self, rise: f64) -> f64 {
        let first_length = self.approach_first_length();
        let first_rise = first_length * self.approach_slope;
        if rise <= first_rise {
            rise / self.approach_slope
        } else {
            match self.approach_extension {
                Some(extension) => {
                    (first_length + (rise - first_rise) / extension.slope)
                        .min(self.approach_length)
                }
                None => first_length,
            }
        }
    }

    /// Half width of the approach surface at `distance` ft from its inner
    /// edge, following the linear flare from inner to outer width.
    pub fn approach_half_width_at(&self, distance: f64) -> f64 {
        let fraction = (distance / self.approach_length).clamp(0.0, 1.0);
        let inner = self.approach_inner_width / 2.0;
        let outer = self.approach_outer_width / 2.0;
        inner + (outer - inner) * fraction
    }
}

/// The dimension sets for both ends of one runway.
///
/// Primary, transitional, horizontal and conical values are identical
/// between the two; the approach values differ per end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayDimensions {
    pub end1: SurfaceDimensionSet,
    pub end2: SurfaceDimensionSet,
}

/// Resolve the dimension sets governing a runway's surfaces.
pub fn resolve(runway: &Runway) -> Result<RunwayDimensions, ClassificationError> {
    check_coherence(runway)?;

    let band = tables::minimums_band(runway.visibility_minimums());
    let primary_width = primary_width(runway, band)?;
    let horizontal_radius = horizontal_radius(runway)?;
    let primary_overrun = if runway.is_hard_surface() {
        PRIMARY_OVERRUN_LENGTH
    } else {
        0.0
    };

    let shared = SharedDimensions {
        primary_width,
        primary_overrun,
        horizontal_radius,
    };
    Ok(RunwayDimensions {
        end1: resolve_end(runway, runway.end1(), band, &shared)?,
        end2: resolve_end(runway, runway.end2(), band, &shared)?,
    })
}

/// Values identical for both ends of one runway.
struct SharedDimensions {
    primary_width: f64,
    primary_overrun: f64,
    horizontal_radius: f64,
}

fn resolve_end(
    runway: &Runway,
    end: &RunwayEnd,
    band: Option<MinimumsBand>,
    shared: &SharedDimensions,
) -> Result<SurfaceDimensionSet, ClassificationError> {
    if requires_band(runway, end.approach_type) && band.is_none() {
        return Err(ClassificationError::UnusableMinimums {
            runway: runway.name().to_string(),
            end: end.name.clone(),
            minimums: runway.visibility_minimums(),
        });
    }
    let row = approach_row(runway, end.approach_type, band).ok_or_else(|| {
        ClassificationError::UnrecognizedCombination {
            runway: runway.name().to_string(),
            end: end.name.clone(),
            runway_type: runway.runway_type(),
            approach: end.approach_type,
        }
    })?;

    let approach_length = match row.extension {
        Some((extra, _)) => row.length + extra,
        None => row.length,
    };
    Ok(SurfaceDimensionSet {
        primary_width: shared.primary_width,
        primary_overrun: shared.primary_overrun,
        approach_inner_width: shared.primary_width,
        approach_outer_width: row.outer_width,
        approach_length,
        approach_slope: row.slope,
        approach_extension: row.extension.map(|(_, slope)| ApproachExtension {
            start: row.length,
            slope,
        }),
        transitional_slope: TRANSITIONAL_SLOPE,
        horizontal_radius: shared.horizontal_radius,
        horizontal_height: HORIZONTAL_SURFACE_HEIGHT,
        conical_slope: CONICAL_SLOPE,
        conical_extent: CONICAL_SURFACE_EXTENT,
    })
}

/// Per-end and runway-level combination rules that make a runway
/// unclassifiable regardless of the tables.
fn check_coherence(runway: &Runway) -> Result<(), ClassificationError> {
    for end in runway.ends() {
        if runway.runway_type() == RunwayType::Visual && end.approach_type.is_instrument() {
            return Err(ClassificationError::VisualRunwayInstrumentEnd {
                runway: runway.name().to_string(),
                end: end.name.clone(),
                approach: end.approach_type,
            });
        }
        if end.approach_type == ApproachType::PrecisionInstrument
            && runway.runway_type() != RunwayType::PrecisionInstrument
        {
            return Err(ClassificationError::PrecisionApproachMismatch {
                runway: runway.name().to_string(),
                end: end.name.clone(),
                runway_type: runway.runway_type(),
            });
        }
    }

    let required_approach = match runway.runway_type() {
        RunwayType::PrecisionInstrument => Some(ApproachType::PrecisionInstrument),
        RunwayType::NonPrecisionInstrument => Some(ApproachType::NonPrecisionInstrument),
        RunwayType::Utility | RunwayType::Visual => None,
    };
    if let Some(approach) = required_approach {
        if !runway.has_approach(approach) {
            return Err(ClassificationError::DesignationMismatch {
                runway: runway.name().to_string(),
                runway_type: runway.runway_type(),
            });
        }
    }
    Ok(())
}

fn primary_width(
    runway: &Runway,
    band: Option<MinimumsBand>,
) -> Result<f64, ClassificationError> {
    if runway.runway_type() == RunwayType::NonPrecisionInstrument && band.is_none() {
        // The non-precision width rows are keyed by minimums band
        let instrument_end = runway
            .ends()
            .into_iter()
            .find(|end| end.approach_type.is_instrument())
            .unwrap_or_else(|| runway.end1());
        return Err(ClassificationError::UnusableMinimums {
            runway: runway.name().to_string(),
            end: instrument_end.name.clone(),
            minimums: runway.visibility_minimums(),
        });
    }

    PRIMARY_WIDTHS
        .iter()
        .find(|row| {
            row.runway == runway.runway_type()
                && row
                    .instrument_approach
                    .map_or(true, |required| required == runway.has_instrument_approach())
                && row.minimums.map_or(true, |required| Some(required) == band)
        })
        .map(|row| row.width)
        .ok_or_else(|| ClassificationError::UnrecognizedCombination {
            runway: runway.name().to_string(),
            end: runway.end1().name.clone(),
            runway_type: runway.runway_type(),
            approach: runway.end1().approach_type,
        })
}

fn horizontal_radius(runway: &Runway) -> Result<f64, ClassificationError> {
    HORIZONTAL_RADII
        .iter()
        .find(|(row, _)| *row == runway.runway_type())
        .map(|(_, radius)| *radius)
        .ok_or_else(|| ClassificationError::UnrecognizedCombination {
            runway: runway.name().to_string(),
            end: runway.end1().name.clone(),
            runway_type: runway.runway_type(),
            approach: runway.end1().approach_type,
        })
}

fn approach_row(
    runway: &Runway,
    approach: ApproachType,
    band: Option<MinimumsBand>,
) -> Option<&'static tables::ApproachRow> {
    APPROACH_DIMENSIONS.iter().find(|row| {
        row.approach == approach
            && row
                .utility
                .map_or(true, |utility| utility == runway.runway_type().is_utility())
            && row.minimums.map_or(true, |required| Some(required) == band)
    })
}

/// Whether selecting this end's approach row depends on the minimums band.
fn requires_band(runway: &Runway, approach: ApproachType) -> bool {
    approach == ApproachType::NonPrecisionInstrument && !runway.runway_type().is_utility()
}
