pub mod builder;
pub mod cache;
mod horizontal;
pub mod surface;

pub use builder::{build, GeometryError, RunwaySurfaces};
pub use cache::SurfaceCache;
pub use surface::{CeilingModel, Surface, SurfaceKind};
