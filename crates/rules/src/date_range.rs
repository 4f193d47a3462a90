//! Date-range constraint evaluation.
//!
//! A constraint has up to three bounds, combined with AND:
//! - `withinLast`: `"<N><unit>"` where unit is `h`ours, `d`ays, or `m`inutes
//! - `after`: ISO-8601 timestamp, or `"-<N><unit>"` relative to now
//! - `before`: same forms as `after`
//!
//! Any bound that fails to parse is treated as satisfied rather than as a
//! filter; a malformed spec must never silently drop records.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::schema::DateRange;

/// Evaluate a constraint against a record timestamp, relative to `Utc::now()`.
pub fn evaluate(spec: &DateRange, log_time: DateTime<Utc>) -> bool {
    evaluate_at(spec, log_time, Utc::now())
}

/// Evaluate a constraint with an injected `now` (testable core).
pub fn evaluate_at(spec: &DateRange, log_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    if let Some(window) = spec.within_last.as_deref() {
        match parse_window(window) {
            Some(duration) => {
                if log_time < now - duration {
                    return false;
                }
            }
            None => warn!(spec = %window, "unparsable withinLast window, ignoring constraint"),
        }
    }

    if let Some(bound) = spec.after.as_deref() {
        match resolve_bound(bound, now) {
            Some(after) => {
                if log_time < after {
                    return false;
                }
            }
            None => warn!(spec = %bound, "unparsable after bound, ignoring constraint"),
        }
    }

    if let Some(bound) = spec.before.as_deref() {
        match resolve_bound(bound, now) {
            Some(before) => {
                if log_time > before {
                    return false;
                }
            }
            None => warn!(spec = %bound, "unparsable before bound, ignoring constraint"),
        }
    }

    true
}

/// Parse `"<N><unit>"` into a duration. Unit: `h`, `d`, or `m`.
fn parse_window(spec: &str) -> Option<Duration> {
    let spec = spec.trim();
    let unit = spec.chars().last()?;
    let count: i64 = spec[..spec.len() - unit.len_utf8()].trim().parse().ok()?;
    if count < 0 {
        return None;
    }
    match unit.to_ascii_lowercase() {
        'h' => Some(Duration::hours(count)),
        'd' => Some(Duration::days(count)),
        'm' => Some(Duration::minutes(count)),
        _ => None,
    }
}

/// Resolve an `after`/`before` bound: `"-<N><unit>"` relative to now, or an
/// ISO-8601 timestamp (with or without offset, date-only accepted).
fn resolve_bound(spec: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let spec = spec.trim();
    if let Some(relative) = spec.strip_prefix('-') {
        return parse_window(relative).map(|d| now - d);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(spec) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(spec, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(spec, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}
