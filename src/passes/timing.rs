use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::catalog::ConstellationSpec;
use crate::passes::error::PassError;

/// Last and next acquisition times for one constellation, relative to `now`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassTiming {
    pub constellation: String,
    pub last_pass: DateTime<Utc>,
    pub last_image_available: DateTime<Utc>,
    /// Never negative: an elapsed revisit interval means the next pass is due now.
    pub hours_until_next: f64,
    pub next_pass: DateTime<Utc>,
    pub next_image_available: DateTime<Utc>,
}

/// Derives pass timing from the revisit interval and the time since the
/// last overflight. Processing latency uses the upper end of the range.
pub fn pass_timing(
    spec: &ConstellationSpec,
    last_pass_hours_ago: f64,
    now: DateTime<Utc>,
) -> Result<PassTiming, PassError> {
    let latency = spec.data_latency_hours.max;
    let overflow = || PassError::TimeOverflow(spec.name.clone());

    let last_pass = shift(now, -last_pass_hours_ago).ok_or_else(overflow)?;
    let last_image_available = shift(last_pass, latency).ok_or_else(overflow)?;

    let hours_until_next = (spec.revisit_hours() - last_pass_hours_ago).max(0.0);
    let next_pass = shift(now, hours_until_next).ok_or_else(overflow)?;
    let next_image_available = shift(next_pass, latency).ok_or_else(overflow)?;

    Ok(PassTiming {
        constellation: spec.name.clone(),
        last_pass,
        last_image_available,
        hours_until_next,
        next_pass,
        next_image_available,
    })
}

/// Timing at the constellation's reference offset from the catalog.
pub fn reference_timing(spec: &ConstellationSpec, now: DateTime<Utc>) -> Result<PassTiming, PassError> {
    pass_timing(spec, spec.last_pass_offset_hours, now)
}

/// Converts fractional hours to a chrono duration at millisecond precision.
/// `None` when the value is not finite or does not fit a duration.
pub fn hours(h: f64) -> Option<Duration> {
    let ms = (h * 3_600_000.0).round();
    if !ms.is_finite() || ms.abs() >= i64::MAX as f64 {
        return None;
    }
    Duration::try_milliseconds(ms as i64)
}

pub(crate) fn shift(t: DateTime<Utc>, h: f64) -> Option<DateTime<Utc>> {
    t.checked_add_signed(hours(h)?)
}

/// Relative description of `target` seen from `now`: `"5m ago"`, `"in 3h"`, `"in 2d"`.
pub fn format_time_delta(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (target - now).num_milliseconds() as f64 / 1000.0;
    let h = seconds.abs() / 3600.0;

    let magnitude = if h < 1.0 {
        format!("{}m", (h * 60.0) as i64)
    } else if h < 24.0 {
        format!("{}h", h as i64)
    } else {
        format!("{}d", (h / 24.0) as i64)
    };

    if seconds < 0.0 {
        format!("{} ago", magnitude)
    } else {
        format!("in {}", magnitude)
    }
}
