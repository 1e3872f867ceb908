//! Core data types for the shot-schedule allocator.

use chrono::NaiveTime;
use pyo3::prelude::*;

use crate::clock::Minutes;

/// One shot in a shotlist schedule.
///
/// Mirrors the persisted shotlist item record; the allocator reads
/// `order_index`, `shot_duration` and `duration_locked`, computes
/// `start_time`, and carries everything else through untouched.
#[pyclass]
#[derive(Clone, Debug)]
pub struct ShotEntry {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub shot_name: String,
    #[pyo3(get, set)]
    pub order_index: i32,
    /// Duration in whole minutes.
    #[pyo3(get, set)]
    pub shot_duration: Minutes,
    /// When set, redistribution never alters `shot_duration`.
    #[pyo3(get, set)]
    pub duration_locked: bool,
    /// Computed wall-clock start; `None` until a layout pass assigns it.
    #[pyo3(get, set)]
    pub start_time: Option<NaiveTime>,
}

#[pymethods]
impl ShotEntry {
    #[new]
    #[pyo3(signature = (id, shot_name, order_index, shot_duration, duration_locked=false, start_time=None))]
    fn new(
        id: String,
        shot_name: String,
        order_index: i32,
        shot_duration: Minutes,
        duration_locked: bool,
        start_time: Option<NaiveTime>,
    ) -> Self {
        Self {
            id,
            shot_name,
            order_index,
            shot_duration,
            duration_locked,
            start_time,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ShotEntry(id={:?}, shot_name={:?}, order_index={}, shot_duration={}, locked={})",
            self.id, self.shot_name, self.order_index, self.shot_duration, self.duration_locked
        )
    }
}
