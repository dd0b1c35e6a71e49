use part77::{
    build, resolve, ApproachType, GeoPoint, Query, Runway, RunwayEnd, RunwaySurfaces, RunwayType,
};

/// One degree of latitude in feet, for placing fixtures by foot offsets.
pub const FEET_PER_DEGREE: f64 = 364_566.929_4;

/// Established airport elevation shared by the fixtures. [ft MSL]
pub const AIRPORT_ELEVATION: f64 = 1135.0;

/// Length of every fixture runway. [ft]
pub const RUNWAY_LENGTH: f64 = 5000.0;

/// A geographic point `x_ft` east and `y_ft` north of the equatorial
/// origin, where a degree of longitude and of latitude span the same
/// number of feet.
pub fn geo_at_feet(x_ft: f64, y_ft: f64) -> GeoPoint {
    GeoPoint::new(x_ft / FEET_PER_DEGREE, y_ft / FEET_PER_DEGREE)
}

/// A query at a foot offset from the fixture origin.
pub fn query_at_feet(x_ft: f64, y_ft: f64, elevation: f64) -> Query {
    Query::new(geo_at_feet(x_ft, y_ft), elevation, AIRPORT_ELEVATION)
}

/// An east-west runway of the given class, end1 at the origin and end2
/// 5,000 ft east. End names are taken from the runway name.
pub fn create_test_runway(
    name: &str,
    runway_type: RunwayType,
    approach1: ApproachType,
    approach2: ApproachType,
    is_hard_surface: bool,
    visibility_minimums: f64,
) -> Runway {
    let (name1, name2) = name.split_once('/').unwrap();
    Runway::new(
        name,
        runway_type,
        RunwayEnd::new(name1, geo_at_feet(0.0, 0.0), approach1),
        RunwayEnd::new(name2, geo_at_feet(RUNWAY_LENGTH, 0.0), approach2),
        is_hard_surface,
        visibility_minimums,
    )
    .unwrap()
}

/// A soft-surfaced utility runway with visual approaches both ways.
pub fn create_utility_runway() -> Runway {
    create_test_runway(
        "8/26",
        RunwayType::Utility,
        ApproachType::Visual,
        ApproachType::Visual,
        false,
        0.0,
    )
}

/// A paved visual runway larger than utility.
pub fn create_visual_runway() -> Runway {
    create_test_runway(
        "9/27",
        RunwayType::Visual,
        ApproachType::Visual,
        ApproachType::Visual,
        true,
        0.0,
    )
}

/// A paved non-precision instrument runway with minimums above
/// three-quarters of a mile.
pub fn create_npi_runway() -> Runway {
    create_test_runway(
        "17/35",
        RunwayType::NonPrecisionInstrument,
        ApproachType::NonPrecisionInstrument,
        ApproachType::Visual,
        true,
        1.0,
    )
}

/// A paved precision instrument runway, precision approach to end1.
pub fn create_precision_runway() -> Runway {
    create_test_runway(
        "16/34",
        RunwayType::PrecisionInstrument,
        ApproachType::PrecisionInstrument,
        ApproachType::Visual,
        true,
        0.5,
    )
}

/// One representative runway per class.
pub fn create_fixture_runways() -> Vec<Runway> {
    vec![
        create_utility_runway(),
        create_visual_runway(),
        create_npi_runway(),
        create_precision_runway(),
    ]
}

/// Surfaces for `runway`, classified and built in one step.
pub fn build_surfaces(runway: &Runway) -> RunwaySurfaces {
    let dimensions = resolve(runway).unwrap();
    build(runway, &dimensions).unwrap()
}
