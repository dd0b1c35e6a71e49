//! Runway description used as input to surface generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transform::GeoPoint;
use crate::utils::constants::MAX_REFERENCE_LATITUDE;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("runway name is empty")]
    EmptyName,

    #[error("runway {runway}: end name is empty")]
    EmptyEndName { runway: String },

    #[error("runway {runway}: end {end} has a non-finite coordinate")]
    NonFiniteCoordinate { runway: String, end: String },

    #[error("runway {runway}: end {end} latitude {latitude} is outside the usable range")]
    LatitudeOutOfRange {
        runway: String,
        end: String,
        latitude: f64,
    },

    #[error("runway {runway}: both ends are at the same position")]
    CoincidentEnds { runway: String },

    #[error("runway {runway}: visibility minimums {value} is not a usable distance")]
    InvalidMinimums { runway: String, value: f64 },

    #[error("unknown runway type: {0}")]
    UnknownRunwayType(String),

    #[error("unknown approach type: {0}")]
    UnknownApproachType(String),
}

/// Runway categories distinguished by 14 CFR 77.19.
///
/// A utility runway is one built for propeller aircraft of 12,500 lb or
/// less; the instrument designations describe the most capable procedure
/// the runway is planned or approved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunwayType {
    Utility,
    Visual,
    NonPrecisionInstrument,
    PrecisionInstrument,
}

impl RunwayType {
    pub fn is_utility(&self) -> bool {
        matches!(self, RunwayType::Utility)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunwayType::Utility => "utility",
            RunwayType::Visual => "visual",
            RunwayType::NonPrecisionInstrument => "non_precision_instrument",
            RunwayType::PrecisionInstrument => "precision_instrument",
        }
    }
}

impl fmt::Display for RunwayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RunwayType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utility" => Ok(RunwayType::Utility),
            "visual" => Ok(RunwayType::Visual),
            "non_precision_instrument" => Ok(RunwayType::NonPrecisionInstrument),
            "precision_instrument" => Ok(RunwayType::PrecisionInstrument),
            other => Err(ValidationError::UnknownRunwayType(other.to_string())),
        }
    }
}

/// The kind of approach procedure serving one runway end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproachType {
    Visual,
    NonPrecisionInstrument,
    PrecisionInstrument,
}

impl ApproachType {
    pub fn is_instrument(&self) -> bool {
        !matches!(self, ApproachType::Visual)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApproachType::Visual => "visual",
            ApproachType::NonPrecisionInstrument => "non_precision_instrument",
            ApproachType::PrecisionInstrument => "precision_instrument",
        }
    }
}

impl fmt::Display for ApproachType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApproachType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visual" => Ok(ApproachType::Visual),
            "non_precision_instrument" => Ok(ApproachType::NonPrecisionInstrument),
            "precision_instrument" => Ok(ApproachType::PrecisionInstrument),
            other => Err(ValidationError::UnknownApproachType(other.to_string())),
        }
    }
}

/// One threshold of a runway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayEnd {
    pub name: String,
    pub position: GeoPoint, // threshold position [deg]
    pub approach_type: ApproachType,
}

impl RunwayEnd {
    pub fn new(name: impl Into<String>, position: GeoPoint, approach_type: ApproachType) -> Self {
        Self {
            name: name.into(),
            position,
            approach_type,
        }
    }
}

/// A validated runway. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    name: String,
    runway_type: RunwayType,
    end1: RunwayEnd,
    end2: RunwayEnd,
    is_hard_surface: bool,
    visibility_minimums: f64, // lowest published minimums [statute miles], 0 when unpublished
}

impl Runway {
    pub fn new(
        name: impl Into<String>,
        runway_type: RunwayType,
        end1: RunwayEnd,
        end2: RunwayEnd,
        is_hard_surface: bool,
        visibility_minimums: f64,
    ) -> Result<Self, ValidationError> {
        let runway = Self {
            name: name.into(),
            runway_type,
            end1,
            end2,
            is_hard_surface,
            visibility_minimums,
        };
        runway.validate()?;
        Ok(runway)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        for end in self.ends() {
            if end.name.trim().is_empty() {
                return Err(ValidationError::EmptyEndName {
                    runway: self.name.clone(),
                });
            }
            if !end.position.x.is_finite() || !end.position.y.is_finite() {
                return Err(ValidationError::NonFiniteCoordinate {
                    runway: self.name.clone(),
                    end: end.name.clone(),
                });
            }
            if end.position.y.abs() > MAX_REFERENCE_LATITUDE {
                return Err(ValidationError::LatitudeOutOfRange {
                    runway: self.name.clone(),
                    end: end.name.clone(),
                    latitude: end.position.y,
                });
            }
        }
        if self.end1.position == self.end2.position {
            return Err(ValidationError::CoincidentEnds {
                runway: self.name.clone(),
            });
        }
        if !self.visibility_minimums.is_finite() || self.visibility_minimums < 0.0 {
            return Err(ValidationError::InvalidMinimums {
                runway: self.name.clone(),
                value: self.visibility_minimums,
            });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn runway_type(&self) -> RunwayType {
        self.runway_type
    }

    pub fn end1(&self) -> &RunwayEnd {
        &self.end1
    }

    pub fn end2(&self) -> &RunwayEnd {
        &self.end2
    }

    pub fn ends(&self) -> [&RunwayEnd; 2] {
        [&self.end1, &self.end2]
    }

    pub fn is_hard_surface(&self) -> bool {
        self.is_hard_surface
    }

    pub fn visibility_minimums(&self) -> f64 {
        self.visibility_minimums
    }

    /// Whether any end is served by the given approach type.
    pub fn has_approach(&self, approach_type: ApproachType) -> bool {
        self.ends().iter().any(|end| end.approach_type == approach_type)
    }

    /// Whether any end is served by an instrument procedure.
    pub fn has_instrument_approach(&self) -> bool {
        self.ends().iter().any(|end| end.approach_type.is_instrument())
    }
}
