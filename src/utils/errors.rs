use std::io;
use thiserror::Error;

use crate::classification::ClassificationError;
use crate::io::CsvError;
use crate::runway::ValidationError;
use crate::surfaces::GeometryError;

#[derive(Error, Debug)]
pub enum Part77Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Runway file error: {0}")]
    Csv(#[from] CsvError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
