//! Memoized surface construction.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use super::builder::{self, RunwaySurfaces};
use crate::classification;
use crate::runway::Runway;
use crate::utils::errors::Part77Error;

/// Caches built surfaces so repeated queries against the same runway do
/// not regenerate geometry. Entries are keyed by runway name; a runway
/// whose geometry changes must be invalidated first.
#[derive(Debug, Default)]
pub struct SurfaceCache {
    entries: HashMap<String, RunwaySurfaces>,
}

impl SurfaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The surfaces for `runway`, built on first use.
    pub fn get_or_build(&mut self, runway: &Runway) -> Result<&RunwaySurfaces, Part77Error> {
        match self.entries.entry(runway.name().to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let dimensions = classification::resolve(runway)?;
                let surfaces = builder::build(runway, &dimensions)?;
                debug!(runway = runway.name(), "cached built surfaces");
                Ok(entry.insert(surfaces))
            }
        }
    }

    /// Every cached surface set, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RunwaySurfaces> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop a runway's cached surfaces, forcing a rebuild on next use.
    pub fn invalidate(&mut self, runway_name: &str) {
        self.entries.remove(runway_name);
    }
}
