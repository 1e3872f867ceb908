//! Rust implementation of the Call Sheet schedule allocation core.
//!
//! This module provides the shotlist data types and time-allocation
//! algorithms for the scheduling system. The algorithms are pure Rust; a
//! thin PyO3 layer exposes them to the Python backend, with clock times
//! crossing the boundary as `datetime.time` values.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveTime;
use pyo3::prelude::*;

pub mod allocator;
pub mod clock;
mod config;
pub mod logging;
mod models;

pub use allocator::{
    layout_after_manual_edit, layout_sequential, layout_with_boundaries, total_duration,
};
pub use clock::{
    add_minutes, calculate_end_time, format_clock_time, format_duration, parse_clock_time,
    window_minutes, ClockError, Minutes,
};
pub use config::AllocatorConfig;
pub use models::ShotEntry;

/// Lay out shots from a call time with no wrap boundary.
///
/// Durations are untouched; each shot starts where the previous one ends.
///
/// # Arguments
/// * `items` - Shot entries in any order
/// * `start_time` - Call time for the first shot
///
/// # Returns
/// * New entries sorted by order with dense indexes and computed start times
#[pyfunction]
#[pyo3(name = "layout_sequential")]
fn py_layout_sequential(items: Vec<ShotEntry>, start_time: NaiveTime) -> Vec<ShotEntry> {
    allocator::layout_sequential(&items, start_time)
}

/// Lay out shots so the schedule fills the call-to-wrap window exactly.
///
/// Locked durations are reserved first; unlocked shots split the remaining
/// minutes evenly, earlier shots absorbing the remainder. An empty or
/// inverted window stacks every shot at the call time with minimum
/// durations.
///
/// # Arguments
/// * `items` - Shot entries in any order
/// * `start_time` - Call time
/// * `end_time` - Wrap time
/// * `config` - Optional allocation knobs (defaults used when omitted)
///
/// # Returns
/// * New entries with redistributed durations and computed start times
#[pyfunction]
#[pyo3(name = "layout_with_boundaries")]
#[pyo3(signature = (items, start_time, end_time, config=None))]
fn py_layout_with_boundaries(
    items: Vec<ShotEntry>,
    start_time: NaiveTime,
    end_time: NaiveTime,
    config: Option<AllocatorConfig>,
) -> Vec<ShotEntry> {
    let config = config.unwrap_or_default();
    allocator::layout_with_boundaries(&items, start_time, end_time, &config)
}

/// Re-lay out shots after one shot's duration was edited by hand.
///
/// Shots before the edited one are untouched; the edited shot takes the new
/// duration and is locked; shots after it re-split the remaining window
/// ("shots-below" redistribution). An unknown `edited_id` is treated as a
/// no-op edit.
///
/// # Arguments
/// * `items` - Shot entries in any order
/// * `edited_id` - Id of the edited shot
/// * `new_duration` - Edited duration in minutes
/// * `start_time` - Call time
/// * `end_time` - Wrap time
/// * `config` - Optional allocation knobs (defaults used when omitted)
///
/// # Returns
/// * New entries with the edit applied and downstream durations re-split
#[pyfunction]
#[pyo3(name = "layout_after_manual_edit")]
#[pyo3(signature = (items, edited_id, new_duration, start_time, end_time, config=None))]
fn py_layout_after_manual_edit(
    items: Vec<ShotEntry>,
    edited_id: &str,
    new_duration: Minutes,
    start_time: NaiveTime,
    end_time: NaiveTime,
    config: Option<AllocatorConfig>,
) -> Vec<ShotEntry> {
    let config = config.unwrap_or_default();
    allocator::layout_after_manual_edit(
        &items,
        edited_id,
        new_duration,
        start_time,
        end_time,
        &config,
    )
}

/// Sum of all shot durations in minutes.
#[pyfunction]
#[pyo3(name = "total_duration")]
fn py_total_duration(items: Vec<ShotEntry>) -> Minutes {
    allocator::total_duration(&items)
}

/// Parse an `"HH:MM"` 24-hour clock string.
///
/// # Raises
/// * ValueError if the string is malformed or a field is out of range
#[pyfunction]
#[pyo3(name = "parse_clock_time")]
fn py_parse_clock_time(s: &str) -> PyResult<NaiveTime> {
    match clock::parse_clock_time(s) {
        Ok(time) => Ok(time),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Format a clock time as zero-padded 24-hour `"HH:MM"`.
#[pyfunction]
#[pyo3(name = "format_clock_time")]
fn py_format_clock_time(time: NaiveTime) -> String {
    clock::format_clock_time(time)
}

/// End of a block starting at `start` and running `duration` minutes.
#[pyfunction]
#[pyo3(name = "calculate_end_time")]
fn py_calculate_end_time(start: NaiveTime, duration: Minutes) -> NaiveTime {
    clock::calculate_end_time(start, duration)
}

/// Format minutes as a human-readable duration ("2h 15min", "2h", "45min").
#[pyfunction]
#[pyo3(name = "format_duration")]
fn py_format_duration(minutes: Minutes) -> String {
    clock::format_duration(minutes)
}

/// The callsheet.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<ShotEntry>()?;
    m.add_class::<AllocatorConfig>()?;

    // Layout algorithms
    m.add_function(wrap_pyfunction!(py_layout_sequential, m)?)?;
    m.add_function(wrap_pyfunction!(py_layout_with_boundaries, m)?)?;
    m.add_function(wrap_pyfunction!(py_layout_after_manual_edit, m)?)?;
    m.add_function(wrap_pyfunction!(py_total_duration, m)?)?;

    // Clock helpers
    m.add_function(wrap_pyfunction!(py_parse_clock_time, m)?)?;
    m.add_function(wrap_pyfunction!(py_format_clock_time, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_end_time, m)?)?;
    m.add_function(wrap_pyfunction!(py_format_duration, m)?)?;

    Ok(())
}
