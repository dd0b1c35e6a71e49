pub mod classification;
pub mod evaluation;
pub mod geometry;
pub mod io;
pub mod runway;
pub mod surfaces;
pub mod transform;
pub mod utils;

pub use classification::{resolve, RunwayDimensions, SurfaceDimensionSet};
pub use evaluation::{evaluate, evaluate_all, Query, ZoneInfo};
pub use runway::{ApproachType, Runway, RunwayEnd, RunwayType};
pub use surfaces::{build, RunwaySurfaces, Surface, SurfaceCache, SurfaceKind};
pub use transform::{GeoPoint, LocalFrame, LocalPoint};
pub use utils::errors::Part77Error;
