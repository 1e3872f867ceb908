//! Shot-schedule time allocation.
//!
//! Three entry points cover the shotlist layout flows:
//! - [`layout_sequential`]: call time only; start times follow durations.
//! - [`layout_with_boundaries`]: call and wrap time both set; unlocked
//!   durations are redistributed so the schedule fills the window exactly.
//! - [`layout_after_manual_edit`]: one duration edited by hand; only shots
//!   after the edited one absorb the change.
//!
//! All entry points are pure: they take entries by shared reference and
//! return fresh records with dense `order_index` values and computed start
//! times. Locked durations pass through every path unchanged.

use chrono::NaiveTime;

use crate::clock::{add_minutes, format_clock_time, window_minutes, Minutes};
use crate::config::AllocatorConfig;
use crate::logging::VERBOSITY_SILENT;
use crate::models::ShotEntry;
use crate::{log_debug, log_decisions, log_entries};

/// Clone entries sorted by `order_index` ascending.
///
/// The sort is stable, so duplicate indexes keep their input order.
fn sorted_by_order(items: &[ShotEntry]) -> Vec<ShotEntry> {
    let mut entries = items.to_vec();
    entries.sort_by_key(|entry| entry.order_index);
    entries
}

/// Reassign `order_index` densely and walk start times forward from `start`.
fn assign_start_times(entries: &mut [ShotEntry], start: NaiveTime, verbosity: u8) {
    let mut cursor = start;
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.order_index = index as i32;
        entry.start_time = Some(cursor);
        log_entries!(
            verbosity,
            "  shot {} starts {} ({}min)",
            entry.id,
            format_clock_time(cursor),
            entry.shot_duration
        );
        cursor = add_minutes(cursor, entry.shot_duration);
    }
}

/// Split `remaining` minutes into `count` shares.
///
/// Each share gets the integer base `remaining / count`; the first
/// `remaining % count` shares get one extra minute, so earlier shots in
/// sequence absorb the remainder. Every share is floored at `min`, which
/// means the shares can sum to more than `remaining` when there is not
/// enough time to go around.
fn distribute_minutes(remaining: Minutes, count: usize, min: Minutes) -> Vec<Minutes> {
    let count = count as Minutes;
    let remaining = remaining.max(0);
    let base = remaining / count;
    let extras = remaining % count;
    (0..count)
        .map(|slot| {
            let share = if slot < extras { base + 1 } else { base };
            share.max(min)
        })
        .collect()
}

/// Overwrite the durations of unlocked entries in `entries` with `shares`,
/// in order.
fn apply_shares(entries: &mut [ShotEntry], shares: Vec<Minutes>) {
    for (entry, share) in entries
        .iter_mut()
        .filter(|entry| !entry.duration_locked)
        .zip(shares)
    {
        entry.shot_duration = share;
    }
}

/// Defensive fallback for a zero or negative window: unlocked shots drop to
/// the minimum duration and every shot stacks at the start instant. Not a
/// meaningful schedule; callers are expected to configure wrap after call.
fn stack_at_start(
    mut entries: Vec<ShotEntry>,
    start: NaiveTime,
    config: &AllocatorConfig,
) -> Vec<ShotEntry> {
    log_decisions!(
        config.verbosity,
        "layout: window is empty, stacking {} shots at {}",
        entries.len(),
        format_clock_time(start)
    );
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.order_index = index as i32;
        if !entry.duration_locked {
            entry.shot_duration = config.min_shot_minutes;
        }
        entry.start_time = Some(start);
    }
    entries
}

/// Lay out shots from a call time with no wrap boundary.
///
/// Durations are untouched; each shot starts where the previous one ends.
///
/// # Arguments
/// * `items` - Entries in any order; sorted by `order_index` internally
/// * `start_time` - Call time for the first shot
///
/// # Returns
/// * New entries with dense `order_index` and computed start times
pub fn layout_sequential(items: &[ShotEntry], start_time: NaiveTime) -> Vec<ShotEntry> {
    let mut entries = sorted_by_order(items);
    assign_start_times(&mut entries, start_time, VERBOSITY_SILENT);
    entries
}

/// Lay out shots so the schedule fits the call-to-wrap window exactly.
///
/// Locked durations are reserved first; the remaining minutes are split
/// evenly across unlocked shots, with earlier shots absorbing the remainder
/// minute by minute. Every unlocked shot gets at least
/// `config.min_shot_minutes` even when nothing remains, so a fully reserved
/// window can overflow by the minimum-duration slack.
///
/// A window where `end_time <= start_time` falls back to stacking all shots
/// at the call time with minimum durations.
///
/// # Arguments
/// * `items` - Entries in any order; sorted by `order_index` internally
/// * `start_time` - Call time
/// * `end_time` - Wrap time
/// * `config` - Allocation knobs (minimum duration, verbosity)
///
/// # Returns
/// * New entries with redistributed durations and computed start times
pub fn layout_with_boundaries(
    items: &[ShotEntry],
    start_time: NaiveTime,
    end_time: NaiveTime,
    config: &AllocatorConfig,
) -> Vec<ShotEntry> {
    let mut entries = sorted_by_order(items);
    if entries.is_empty() {
        return entries;
    }

    let total = window_minutes(start_time, end_time);
    if total <= 0 {
        return stack_at_start(entries, start_time, config);
    }

    let reserved: Minutes = entries
        .iter()
        .filter(|entry| entry.duration_locked)
        .map(|entry| entry.shot_duration)
        .sum();
    let unlocked_count = entries
        .iter()
        .filter(|entry| !entry.duration_locked)
        .count();
    let remaining = (total - reserved).max(0);

    log_decisions!(
        config.verbosity,
        "layout: window={}min reserved={}min remaining={}min unlocked={}",
        total,
        reserved,
        remaining,
        unlocked_count
    );

    if unlocked_count > 0 {
        let shares = distribute_minutes(remaining, unlocked_count, config.min_shot_minutes);
        log_debug!(config.verbosity, "layout: shares={:?}", shares);
        apply_shares(&mut entries, shares);
    }

    assign_start_times(&mut entries, start_time, config.verbosity);
    entries
}

/// Re-lay out shots after the user edits one shot's duration directly.
///
/// Shots before the edited one keep their durations and positions; the
/// edited shot takes `new_duration` (and is locked, unless
/// `config.lock_edited_entry` is off); shots after it re-split whatever the
/// window has left. An edit therefore pushes time forward without disturbing
/// anything that already happened.
///
/// An `edited_id` that matches no entry is treated as a no-op edit: the list
/// is laid out with [`layout_with_boundaries`] unmodified.
///
/// # Arguments
/// * `items` - Entries in any order; sorted by `order_index` internally
/// * `edited_id` - Id of the shot whose duration was edited
/// * `new_duration` - Edited duration in minutes, clamped to the minimum
/// * `start_time` - Call time
/// * `end_time` - Wrap time
/// * `config` - Allocation knobs
///
/// # Returns
/// * New entries with the edit applied and downstream durations re-split
pub fn layout_after_manual_edit(
    items: &[ShotEntry],
    edited_id: &str,
    new_duration: Minutes,
    start_time: NaiveTime,
    end_time: NaiveTime,
    config: &AllocatorConfig,
) -> Vec<ShotEntry> {
    let mut entries = sorted_by_order(items);
    let Some(edited_pos) = entries.iter().position(|entry| entry.id == edited_id) else {
        log_decisions!(
            config.verbosity,
            "edit: id {:?} not in schedule, laying out unmodified",
            edited_id
        );
        return layout_with_boundaries(items, start_time, end_time, config);
    };

    let new_duration = new_duration.max(config.min_shot_minutes);
    entries[edited_pos].shot_duration = new_duration;
    if config.lock_edited_entry {
        entries[edited_pos].duration_locked = true;
    }

    let total = window_minutes(start_time, end_time);
    let used_above: Minutes = entries[..edited_pos]
        .iter()
        .map(|entry| entry.shot_duration)
        .sum::<Minutes>()
        + new_duration;
    let below = &entries[edited_pos + 1..];
    let used_locked_below: Minutes = below
        .iter()
        .filter(|entry| entry.duration_locked)
        .map(|entry| entry.shot_duration)
        .sum();
    let unlocked_below = below.iter().filter(|entry| !entry.duration_locked).count();
    let remaining_below = (total - used_above - used_locked_below).max(0);

    log_decisions!(
        config.verbosity,
        "edit: shot {} -> {}min, {}min left for {} unlocked below",
        edited_id,
        new_duration,
        remaining_below,
        unlocked_below
    );

    if unlocked_below > 0 {
        let shares = distribute_minutes(remaining_below, unlocked_below, config.min_shot_minutes);
        log_debug!(config.verbosity, "edit: shares={:?}", shares);
        apply_shares(&mut entries[edited_pos + 1..], shares);
    }

    assign_start_times(&mut entries, start_time, config.verbosity);
    entries
}

/// Sum of all shot durations in minutes.
pub fn total_duration(items: &[ShotEntry]) -> Minutes {
    items.iter().map(|entry| entry.shot_duration).sum()
}
