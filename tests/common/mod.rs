// Each test binary pulls in its own subset of these helpers.
#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::{
    assert_footprints_well_formed, assert_simple_ccw_ring, assert_surface_inventory,
};

pub use fixtures::*;
