//! Dimension tables transcribed from 14 CFR 77.19.
//!
//! Rows are matched by runway category plus two qualifiers. A `None`
//! qualifier matches anything, so order within a table does not matter as
//! long as the specific rows carry their qualifiers.

use crate::runway::{ApproachType, RunwayType};

/// Visibility-minimums band separating the two non-precision rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimumsBand {
    /// Published minimums greater than 3/4 statute mile.
    GreaterThanThreeQuarters,
    /// Published minimums as low as 3/4 statute mile.
    AsLowAsThreeQuarters,
}

/// Minimums below this are not attainable on a non-precision procedure.
pub const MIN_NPI_VISIBILITY: f64 = 0.75; // [statute miles]

/// Classify published visibility minimums, or `None` when they are below
/// what a non-precision procedure can be flown to.
pub fn minimums_band(visibility_minimums: f64) -> Option<MinimumsBand> {
    if visibility_minimums > MIN_NPI_VISIBILITY {
        Some(MinimumsBand::GreaterThanThreeQuarters)
    } else if (visibility_minimums - MIN_NPI_VISIBILITY).abs() < 1.0e-9 {
        Some(MinimumsBand::AsLowAsThreeQuarters)
    } else {
        None
    }
}

/// One row of the primary surface width table, 77.19(c).
pub struct PrimaryRow {
    pub runway: RunwayType,
    /// Required presence of a non-precision instrument end, any if `None`.
    pub instrument_approach: Option<bool>,
    /// Required minimums band, any if `None`.
    pub minimums: Option<MinimumsBand>,
    pub width: f64, // [ft]
}

pub const PRIMARY_WIDTHS: &[PrimaryRow] = &[
    PrimaryRow {
        runway: RunwayType::Utility,
        instrument_approach: Some(false),
        minimums: None,
        width: 250.0,
    },
    PrimaryRow {
        runway: RunwayType::Utility,
        instrument_approach: Some(true),
        minimums: None,
        width: 500.0,
    },
    PrimaryRow {
        runway: RunwayType::Visual,
        instrument_approach: None,
        minimums: None,
        width: 500.0,
    },
    PrimaryRow {
        runway: RunwayType::NonPrecisionInstrument,
        instrument_approach: None,
        minimums: Some(MinimumsBand::GreaterThanThreeQuarters),
        width: 500.0,
    },
    PrimaryRow {
        runway: RunwayType::NonPrecisionInstrument,
        instrument_approach: None,
        minimums: Some(MinimumsBand::AsLowAsThreeQuarters),
        width: 1000.0,
    },
    PrimaryRow {
        runway: RunwayType::PrecisionInstrument,
        instrument_approach: None,
        minimums: None,
        width: 1000.0,
    },
];

/// One row of the approach surface table, 77.19(d).
///
/// The inner width always equals the primary surface width, so only the
/// outer width, reach and slope appear here.
pub struct ApproachRow {
    pub approach: ApproachType,
    /// Whether the row applies to utility runways, any if `None`.
    pub utility: Option<bool>,
    /// Required minimums band, any if `None`.
    pub minimums: Option<MinimumsBand>,
    pub outer_width: f64, // [ft]
    pub length: f64,      // [ft] first sloped section
    pub slope: f64,       // rise per ft of run
    /// Level of a precision approach past the sloped section:
    /// additional reach and its shallower slope.
    pub extension: Option<(f64, f64)>, // ([ft], rise per ft)
}

pub const APPROACH_DIMENSIONS: &[ApproachRow] = &[
    ApproachRow {
        approach: ApproachType::Visual,
        utility: Some(true),
        minimums: None,
        outer_width: 1250.0,
        length: 5000.0,
        slope: 1.0 / 20.0,
        extension: None,
    },
    ApproachRow {
        approach: ApproachType::Visual,
        utility: Some(false),
        minimums: None,
        outer_width: 1500.0,
        length: 5000.0,
        slope: 1.0 / 20.0,
        extension: None,
    },
    ApproachRow {
        approach: ApproachType::NonPrecisionInstrument,
        utility: Some(true),
        minimums: None,
        outer_width: 2000.0,
        length: 5000.0,
        slope: 1.0 / 20.0,
        extension: None,
    },
    ApproachRow {
        approach: ApproachType::NonPrecisionInstrument,
        utility: Some(false),
        minimums: Some(MinimumsBand::GreaterThanThreeQuarters),
        outer_width: 3500.0,
        length: 10_000.0,
        slope: 1.0 / 34.0,
        extension: None,
    },
    ApproachRow {
        approach: ApproachType::NonPrecisionInstrument,
        utility: Some(false),
        minimums: Some(MinimumsBand::AsLowAsThreeQuarters),
        outer_width: 4000.0,
        length: 10_000.0,
        slope: 1.0 / 34.0,
        extension: None,
    },
    ApproachRow {
        approach: ApproachType::PrecisionInstrument,
        utility: None,
        minimums: None,
        outer_width: 16_000.0,
        length: 10_000.0,
        slope: 1.0 / 50.0,
        extension: Some((40_000.0, 1.0 / 40.0)),
    },
];

/// Horizontal surface arc radius by runway category, 77.19(a).
pub const HORIZONTAL_RADII: &[(RunwayType, f64)] = &[
    (RunwayType::Utility, 5000.0),
    (RunwayType::Visual, 5000.0),
    (RunwayType::NonPrecisionInstrument, 10_000.0),
    (RunwayType::PrecisionInstrument, 10_000.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimums_band_splits_at_three_quarters() {
        assert_eq!(
            minimums_band(1.0),
            Some(MinimumsBand::GreaterThanThreeQuarters)
        );
        assert_eq!(
            minimums_band(0.75),
            Some(MinimumsBand::AsLowAsThreeQuarters)
        );
        assert_eq!(minimums_band(0.5), None);
        assert_eq!(minimums_band(0.0), None);
    }

    #[test]
    fn test_every_runway_type_has_a_horizontal_radius() {
        for runway_type in [
            RunwayType::Utility,
            RunwayType::Visual,
            RunwayType::NonPrecisionInstrument,
            RunwayType::PrecisionInstrument,
        ] {
            assert!(HORIZONTAL_RADII.iter().any(|(row, _)| *row == runway_type));
        }
    }

    #[test]
    fn test_only_the_precision_row_carries_an_extension() {
        for row in APPROACH_DIMENSIONS {
            assert_eq!(
                row.extension.is_some(),
                row.approach == ApproachType::PrecisionInstrument
            );
        }
    }
}
