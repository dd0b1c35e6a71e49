pub mod resolver;
pub mod tables;

pub use resolver::{
    resolve, ApproachExtension, ClassificationError, RunwayDimensions, SurfaceDimensionSet,
};
pub use tables::MinimumsBand;
