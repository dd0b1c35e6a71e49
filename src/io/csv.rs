//! Reads runway definitions from CSV files.
//!
//! Expected header: `name,type,approaches,coords,end_names,special_surface`
//! with an optional trailing `visibility_minimums` column. `approaches`
//! and `end_names` are dash-separated pairs ordered end1-end2; `coords`
//! is `x1_y1_x2_y2` in decimal degrees; `special_surface` marks a
//! hard-surfaced runway.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::runway::{ApproachType, Runway, RunwayEnd, RunwayType, ValidationError};
use crate::transform::GeoPoint;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: {source}")]
    Record {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: field {field} is malformed: {value:?}")]
    MalformedField {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: {source}")]
    InvalidRunway {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Deserialize)]
struct RunwayRecord {
    name: String,
    #[serde(rename = "type")]
    runway_type: String,
    approaches: String,
    coords: String,
    end_names: String,
    special_surface: String,
    #[serde(default)]
    visibility_minimums: Option<f64>,
}

/// Read every runway in `path`, in file order.
///
/// The whole file is either accepted or rejected; one bad row fails the
/// read with its row number.
pub fn read_runways(path: &Path) -> Result<Vec<Runway>, CsvError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| CsvError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let mut runways = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let row = index + 2; // the header occupies row 1
        let record: RunwayRecord = record.map_err(|source| CsvError::Record { row, source })?;
        runways.push(parse_record(record, row)?);
    }
    debug!(count = runways.len(), path = %path.display(), "loaded runway definitions");
    Ok(runways)
}

fn parse_record(record: RunwayRecord, row: usize) -> Result<Runway, CsvError> {
    let invalid = |source: ValidationError| CsvError::InvalidRunway { row, source };

    let runway_type: RunwayType = record.runway_type.parse().map_err(invalid)?;
    let (approach1, approach2) = split_pair(&record.approaches, row, "approaches")?;
    let approach1: ApproachType = approach1.parse().map_err(invalid)?;
    let approach2: ApproachType = approach2.parse().map_err(invalid)?;
    let (position1, position2) = parse_coords(&record.coords, row)?;
    let (end_name1, end_name2) = split_pair(&record.end_names, row, "end_names")?;
    let is_hard_surface = record.special_surface.trim().eq_ignore_ascii_case("true");
    let visibility_minimums = record.visibility_minimums.unwrap_or(0.0);

    Runway::new(
        record.name,
        runway_type,
        RunwayEnd::new(end_name1, position1, approach1),
        RunwayEnd::new(end_name2, position2, approach2),
        is_hard_surface,
        visibility_minimums,
    )
    .map_err(invalid)
}

fn split_pair<'a>(
    value: &'a str,
    row: usize,
    field: &'static str,
) -> Result<(&'a str, &'a str), CsvError> {
    let mut parts = value.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(CsvError::MalformedField {
            row,
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_coords(value: &str, row: usize) -> Result<(GeoPoint, GeoPoint), CsvError> {
    let malformed = || CsvError::MalformedField {
        row,
        field: "coords",
        value: value.to_string(),
    };

    let parts: Vec<&str> = value.split('_').collect();
    if parts.len() != 4 {
        return Err(malformed());
    }
    let mut numbers = [0.0f64; 4];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part.trim().parse().map_err(|_| malformed())?;
    }
    Ok((
        GeoPoint::new(numbers[0], numbers[1]),
        GeoPoint::new(numbers[2], numbers[3]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_a_well_formed_file() {
        let file = write_csv(
            "name,type,approaches,coords,end_names,special_surface,visibility_minimums\n\
             8/26,visual,visual-visual,-112.01_33.43_-112.0_33.43,8-26,true,0\n\
             17/35,non_precision_instrument,non_precision_instrument-visual,-112.02_33.42_-112.02_33.41,17-35,TRUE,1.0\n",
        );

        let runways = read_runways(file.path()).unwrap();
        assert_eq!(runways.len(), 2);

        let first = &runways[0];
        assert_eq!(first.name(), "8/26");
        assert_eq!(first.runway_type(), RunwayType::Visual);
        assert_eq!(first.end1().name, "8");
        assert_eq!(first.end2().name, "26");
        assert_relative_eq!(first.end1().position.x, -112.01);
        assert_relative_eq!(first.end1().position.y, 33.43);
        assert!(first.is_hard_surface());

        let second = &runways[1];
        assert_eq!(second.end1().approach_type, ApproachType::NonPrecisionInstrument);
        assert_eq!(second.end2().approach_type, ApproachType::Visual);
        assert_relative_eq!(second.visibility_minimums(), 1.0);
    }

    #[test]
    fn test_visibility_column_is_optional() {
        let file = write_csv(
            "name,type,approaches,coords,end_names,special_surface\n\
             8/26,visual,visual-visual,-112.01_33.43_-112.0_33.43,8-26,false\n",
        );

        let runways = read_runways(file.path()).unwrap();
        assert_relative_eq!(runways[0].visibility_minimums(), 0.0);
        assert!(!runways[0].is_hard_surface());
    }

    #[test]
    fn test_unknown_runway_type_names_the_row() {
        let file = write_csv(
            "name,type,approaches,coords,end_names,special_surface\n\
             8/26,gravel,visual-visual,-112.01_33.43_-112.0_33.43,8-26,true\n",
        );

        let err = read_runways(file.path()).unwrap_err();
        match err {
            CsvError::InvalidRunway { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source, ValidationError::UnknownRunwayType("gravel".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_approach_pair_is_rejected() {
        let file = write_csv(
            "name,type,approaches,coords,end_names,special_surface\n\
             8/26,visual,visual,-112.01_33.43_-112.0_33.43,8-26,true\n",
        );

        let err = read_runways(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CsvError::MalformedField {
                field: "approaches",
                ..
            }
        ));
    }

    #[test]
    fn test_coords_must_have_four_components() {
        let file = write_csv(
            "name,type,approaches,coords,end_names,special_surface\n\
             8/26,visual,visual-visual,-112.01_33.43_-112.0,8-26,true\n",
        );

        let err = read_runways(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CsvError::MalformedField { field: "coords", .. }
        ));
    }

    #[test]
    fn test_unparseable_coordinate_is_rejected() {
        let file = write_csv(
            "name,type,approaches,coords,end_names,special_surface\n\
             8/26,visual,visual-visual,west_33.43_-112.0_33.43,8-26,true\n",
        );

        let err = read_runways(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CsvError::MalformedField { field: "coords", .. }
        ));
    }

    #[test]
    fn test_missing_column_is_a_record_error() {
        // No coords column at all
        let file = write_csv(
            "name,type,approaches,end_names,special_surface\n\
             8/26,visual,visual-visual,8-26,true\n",
        );

        let err = read_runways(file.path()).unwrap_err();
        assert!(matches!(err, CsvError::Record { row: 2, .. }));
    }

    #[test]
    fn test_later_row_failures_report_their_row_number() {
        let file = write_csv(
            "name,type,approaches,coords,end_names,special_surface\n\
             8/26,visual,visual-visual,-112.01_33.43_-112.0_33.43,8-26,true\n\
             ,visual,visual-visual,-112.03_33.43_-112.02_33.43,9-27,true\n",
        );

        let err = read_runways(file.path()).unwrap_err();
        match err {
            CsvError::InvalidRunway { row, source } => {
                assert_eq!(row, 3);
                assert_eq!(source, ValidationError::EmptyName);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_reports_the_path() {
        let err = read_runways(Path::new("/nonexistent/runways.csv")).unwrap_err();
        assert!(matches!(err, CsvError::Read { .. }));
    }
}
