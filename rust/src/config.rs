//! Configuration types for the allocator.

use pyo3::prelude::*;

use crate::clock::Minutes;

/// Knobs for the boundary-fitting and manual-edit layout passes.
#[pyclass]
#[derive(Clone, Debug)]
pub struct AllocatorConfig {
    /// Floor for any duration the allocator assigns, in minutes
    #[pyo3(get, set)]
    pub min_shot_minutes: Minutes,
    /// Whether a manual duration edit also locks the edited entry
    #[pyo3(get, set)]
    pub lock_edited_entry: bool,
    /// Verbosity: 0=silent, 1=decisions, 2=entries, 3=debug
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            min_shot_minutes: 1,
            lock_edited_entry: true,
            verbosity: 0,
        }
    }
}

#[pymethods]
impl AllocatorConfig {
    #[new]
    #[pyo3(signature = (min_shot_minutes=None, lock_edited_entry=None, verbosity=None))]
    fn new(
        min_shot_minutes: Option<Minutes>,
        lock_edited_entry: Option<bool>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            min_shot_minutes: min_shot_minutes.unwrap_or(defaults.min_shot_minutes),
            lock_edited_entry: lock_edited_entry.unwrap_or(defaults.lock_edited_entry),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "AllocatorConfig(min_shot_minutes={}, lock_edited_entry={}, verbosity={})",
            self.min_shot_minutes, self.lock_edited_entry, self.verbosity
        )
    }
}
